use std::sync::Arc;
use tracing::instrument;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodoRequest, NewTodo, Todo, UpdateTodo, UpdateTodoRequest};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
///
/// Validation runs before the repository is touched, so invalid input never
/// reaches the store.
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All todos, newest first
    #[instrument(skip(self))]
    pub async fn list_todos(&self) -> TodoResult<Vec<Todo>> {
        self.repository.list().await
    }

    /// Create a todo from a raw request body
    #[instrument(skip(self, input))]
    pub async fn create_todo(&self, input: CreateTodoRequest) -> TodoResult<Todo> {
        let input = NewTodo::try_from(input)?;
        self.repository.create(input).await
    }

    /// Apply a partial update from a raw request body
    #[instrument(skip(self, input), fields(todo_id = id))]
    pub async fn update_todo(&self, id: i32, input: UpdateTodoRequest) -> TodoResult<Todo> {
        let input = UpdateTodo::try_from(input)?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    /// Delete a todo
    #[instrument(skip(self), fields(todo_id = id))]
    pub async fn delete_todo(&self, id: i32) -> TodoResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }
}
