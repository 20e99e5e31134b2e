use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{NewTodo, Todo, UpdateTodo};

/// Repository trait for Todo persistence
///
/// Inputs are already validated; implementations only talk to the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, newest first
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Insert a todo and return the persisted row
    async fn create(&self, input: NewTodo) -> TodoResult<Todo>;

    /// Apply the supplied fields; `None` when no row has `id`
    async fn update(&self, id: i32, input: UpdateTodo) -> TodoResult<Option<Todo>>;

    /// Delete by id; `false` when no row has `id`
    async fn delete(&self, id: i32) -> TodoResult<bool>;
}
