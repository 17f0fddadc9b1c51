use actix_web::{put, web};
use entity::expense::Model as ExpenseModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::expense::RExpenseUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RExpenseUpdate>,
) -> ApiResult<ExpenseModel> {
    info!("Updating expense with ID: {} {:?}", path, body);
    let id = parse_id(&path)?;
    let patch = body.into_inner().validate()?;

    let expense = db
        .update_expense(id, patch)
        .await
        .inspect_err(|e| error!("Error updating expense: {e}"))?;

    info!("Expense updated successfully: {}", expense.id);
    Ok(ApiResponse::Ok(expense))
}
