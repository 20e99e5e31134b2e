//! Store connector for the todo service
//!
//! Wraps a pooled SeaORM [`DatabaseConnection`](sea_orm::DatabaseConnection)
//! with the pieces needed at startup: a lazily connecting pool, a `SELECT 1`
//! readiness probe, a bounded retry loop around it and a migration runner.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::postgres::{self, PostgresConfig};
//!
//! let db = postgres::connect_from_config(PostgresConfig::from_env()?).await?;
//! postgres::wait_until_ready(&db, &RetryConfig::default()).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "todo_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
