pub use sea_orm_migration::prelude::*;

mod m20250412_000001_create_product_table;
mod m20250412_000002_create_user_table;
mod m20250430_000001_create_expense_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_000001_create_product_table::Migration),
            Box::new(m20250412_000002_create_user_table::Migration),
            Box::new(m20250430_000001_create_expense_table::Migration),
        ]
    }
}
