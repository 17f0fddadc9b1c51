use actix_web::{post, web};
use entity::product::Model as ProductModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::product::RProductCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RProductCreate>,
) -> ApiResult<ProductModel> {
    info!("Creating new product with data: {:?}", body);
    let payload = body.into_inner().validate()?;

    let product = db
        .create_product(payload)
        .await
        .inspect_err(|e| error!("Error creating product: {e}"))?;

    info!("Product created successfully: {}", product.id);
    Ok(ApiResponse::Created(product))
}
