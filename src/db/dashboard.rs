use crate::db::postgres_service::PostgresService;
use crate::types::dashboard::DashboardSummary;
use crate::types::error::AppError;
use entity::{expense::Entity as Expense, product::Entity as Product};
use sea_orm::EntityTrait;

impl PostgresService {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        let products = Product::find().all(&self.database_connection).await?;
        let expenses = Expense::find().all(&self.database_connection).await?;
        let (active_users, total_users) = self.count_users().await?;

        Ok(DashboardSummary::compute(&products, &expenses, active_users, total_users))
    }
}
