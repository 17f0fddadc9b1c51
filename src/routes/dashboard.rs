use actix_web::{get, web};
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::dashboard::DashboardSummary;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn summary(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<DashboardSummary> {
    let summary = db
        .dashboard_summary()
        .await
        .inspect_err(|e| error!("Error building dashboard summary: {e}"))?;

    info!(
        "Dashboard: {} products, {} low stock",
        summary.total_products,
        summary.low_stock.len()
    );
    Ok(ApiResponse::Ok(summary))
}
