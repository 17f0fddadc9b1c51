use actix_web::{get, web};
use entity::expense::Model as ExpenseModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, SearchQuery};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<ExpenseModel>> {
    info!("Fetching expenses from database...");
    let expenses = db
        .list_expenses(query.term().as_deref())
        .await
        .inspect_err(|e| error!("Error fetching expenses: {e}"))?;

    info!("Found {} expenses", expenses.len());
    Ok(ApiResponse::Ok(expenses))
}
