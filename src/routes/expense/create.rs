use actix_web::{post, web};
use entity::expense::Model as ExpenseModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::expense::RExpenseCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RExpenseCreate>,
) -> ApiResult<ExpenseModel> {
    info!("Recording expense: {:?}", body);
    let payload = body.into_inner().validate()?;

    let expense = db
        .create_expense(payload)
        .await
        .inspect_err(|e| error!("Error creating expense: {e}"))?;

    info!("Expense created successfully: {}", expense.id);
    Ok(ApiResponse::Created(expense))
}
