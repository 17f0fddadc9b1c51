use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expense::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Expense::Date).date().not_null())
                    .col(ColumnDef::new(Expense::Category).string().not_null())
                    .col(ColumnDef::new(Expense::Description).string().not_null())
                    .col(ColumnDef::new(Expense::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Expense::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Expense::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Expense::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Expense {
    #[sea_orm(iden = "expenses")]
    Table,
    Id,
    Date,
    Category,
    Description,
    Amount,
    CreatedAt,
    UpdatedAt,
}
