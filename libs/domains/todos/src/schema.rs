//! Schema bootstrap for the todos table.

use database::postgres::run_migrations;
use migration::Migrator;
use sea_orm::{DatabaseConnection, DbErr};

/// Create the `todos` table and its index if they do not exist yet.
///
/// Safe to call on every start and from several processes at once: the
/// migration only issues `CREATE ... IF NOT EXISTS` statements and the
/// migrator skips migrations that are already recorded.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    run_migrations::<Migrator>(db, "todos").await
}
