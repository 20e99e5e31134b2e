use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A pre-existing todos table is left untouched.
        manager.create_table(create_todos_table()).await?;
        manager.create_index(create_created_at_index()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).if_exists().to_owned())
            .await
    }
}

fn create_todos_table() -> TableCreateStatement {
    Table::create()
        .table(Todos::Table)
        .if_not_exists()
        .col(pk_auto(Todos::Id))
        .col(text(Todos::Title))
        .col(boolean(Todos::Done).default(false))
        .col(timestamp_with_time_zone(Todos::CreatedAt).default(Expr::current_timestamp()))
        .to_owned()
}

fn create_created_at_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_todos_created_at")
        .table(Todos::Table)
        .col(Todos::CreatedAt)
        .if_not_exists()
        .to_owned()
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    Title,
    Done,
    CreatedAt,
}
