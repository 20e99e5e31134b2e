//! Todos Domain
//!
//! A flat list of todo items persisted in PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP surface under /api/todos
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← One parameterized statement per call
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, raw request bodies, validated inputs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{PgTodoRepository, TodoService, ensure_schema, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//! ensure_schema(&db).await?;
//!
//! let service = TodoService::new(PgTodoRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod schema;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use handlers::TodosApiDoc;
pub use models::{CreateTodoRequest, NewTodo, Todo, UpdateTodo, UpdateTodoRequest};
pub use postgres::PgTodoRepository;
pub use repository::TodoRepository;
pub use schema::ensure_schema;
pub use service::TodoService;
