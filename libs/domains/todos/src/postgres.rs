use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement, Value};
use tracing::info;

use crate::error::{TodoError, TodoResult};
use crate::models::{NewTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

const RETURNING: &str = "id, title, done, created_at";

/// PostgreSQL implementation of TodoRepository
///
/// Every call runs exactly one parameterized statement.
#[derive(Clone)]
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct TodoRow {
    id: i32,
    title: String,
    done: bool,
    created_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            done: row.done,
            created_at: row.created_at,
        }
    }
}

pub fn list_statement() -> Statement {
    Statement::from_string(
        DbBackend::Postgres,
        format!("SELECT {} FROM todos ORDER BY created_at DESC", RETURNING),
    )
}

pub fn insert_statement(input: &NewTodo) -> Statement {
    Statement::from_sql_and_values(
        DbBackend::Postgres,
        format!("INSERT INTO todos (title) VALUES ($1) RETURNING {}", RETURNING),
        [input.title.clone().into()],
    )
}

/// Compose `UPDATE todos SET ... WHERE id = $n RETURNING ...` from the
/// fields present in `input`, in the order title, done.
///
/// Returns `None` when `input` has no fields.
pub fn build_update_statement(id: i32, input: &UpdateTodo) -> Option<Statement> {
    let mut assignments = Vec::with_capacity(2);
    let mut values: Vec<Value> = Vec::with_capacity(3);

    if let Some(title) = &input.title {
        values.push(title.clone().into());
        assignments.push(format!("title = ${}", values.len()));
    }

    if let Some(done) = input.done {
        values.push(done.into());
        assignments.push(format!("done = ${}", values.len()));
    }

    if assignments.is_empty() {
        return None;
    }

    values.push(id.into());
    let sql = format!(
        "UPDATE todos SET {} WHERE id = ${} RETURNING {}",
        assignments.join(", "),
        values.len(),
        RETURNING
    );

    Some(Statement::from_sql_and_values(DbBackend::Postgres, sql, values))
}

pub fn delete_statement(id: i32) -> Statement {
    Statement::from_sql_and_values(
        DbBackend::Postgres,
        "DELETE FROM todos WHERE id = $1",
        [id.into()],
    )
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let rows = TodoRow::find_by_statement(list_statement())
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, input: NewTodo) -> TodoResult<Todo> {
        let todo: Todo = TodoRow::find_by_statement(insert_statement(&input))
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::Database("insert returned no row".to_string()))?
            .into();

        info!(todo_id = todo.id, "Created todo");
        Ok(todo)
    }

    async fn update(&self, id: i32, input: UpdateTodo) -> TodoResult<Option<Todo>> {
        let stmt = build_update_statement(id, &input)
            .ok_or_else(|| TodoError::validation("nothing to update"))?;

        let todo = TodoRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map(Todo::from);

        if todo.is_some() {
            info!(todo_id = id, "Updated todo");
        }
        Ok(todo)
    }

    async fn delete(&self, id: i32) -> TodoResult<bool> {
        let result = self.db.execute_raw(delete_statement(id)).await?;
        let deleted = result.rows_affected() > 0;

        if deleted {
            info!(todo_id = id, "Deleted todo");
        }
        Ok(deleted)
    }
}
