use actix_web::{get, web};
use entity::product::Model as ProductModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, SearchQuery};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<ProductModel>> {
    info!("Fetching products from database...");
    let products = db
        .list_products(query.term().as_deref())
        .await
        .inspect_err(|e| error!("Error fetching products: {e}"))?;

    info!("Found {} products", products.len());
    Ok(ApiResponse::Ok(products))
}
