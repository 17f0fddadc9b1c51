use actix_web::{put, web};
use entity::product::Model as ProductModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::product::RProductUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RProductUpdate>,
) -> ApiResult<ProductModel> {
    info!("Updating product with ID: {} {:?}", path, body);
    let id = parse_id(&path)?;
    let patch = body.into_inner().validate()?;

    let product = db
        .update_product(id, patch)
        .await
        .inspect_err(|e| error!("Error updating product: {e}"))?;

    info!("Product updated successfully: {}", product.id);
    Ok(ApiResponse::Ok(product))
}
