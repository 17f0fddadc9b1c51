use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Product::Name).string().not_null())
                    .col(ColumnDef::new(Product::Image).string().not_null())
                    .col(ColumnDef::new(Product::Category).string().not_null())
                    .col(ColumnDef::new(Product::Price).double().not_null())
                    .col(ColumnDef::new(Product::Stock).integer().not_null())
                    .col(ColumnDef::new(Product::Sku).string().not_null())
                    .col(ColumnDef::new(Product::Description).text().null())
                    .col(
                        ColumnDef::new(Product::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Product::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        // duplicate skus surface as unique violations -> 409
        manager
            .create_index(
                Index::create()
                    .name("idx_products_sku")
                    .table(Product::Table)
                    .col(Product::Sku)
                    .unique()
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Product::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Name,
    Image,
    Category,
    Price,
    Stock,
    Sku,
    Description,
    CreatedAt,
    UpdatedAt,
}
