use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, SearchQuery};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<UserModel>> {
    info!("Fetching users from database...");
    let users = db
        .list_users(query.term().as_deref())
        .await
        .inspect_err(|e| error!("Error fetching users: {e}"))?;

    info!("Found {} users", users.len());
    Ok(ApiResponse::Ok(users))
}
