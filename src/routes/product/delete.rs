use actix_web::{delete, web};
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, DeletedRes};
use crate::utils::webutils::parse_id;

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<DeletedRes> {
    info!("Deleting product with ID: {}", path);
    let id = parse_id(&path)?;

    db.delete_product(id)
        .await
        .inspect_err(|e| error!("Error deleting product: {e}"))?;

    info!("Product deleted successfully");
    Ok(ApiResponse::Ok(DeletedRes {
        message: "Product deleted".to_string(),
        id: id.to_string(),
    }))
}
