use actix_web::{put, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::user::RUserUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserModel> {
    info!("Updating user with ID: {} {:?}", path, body);
    let id = parse_id(&path)?;
    let patch = body.into_inner().validate()?;

    let user = db
        .update_user(id, patch)
        .await
        .inspect_err(|e| error!("Error updating user: {e}"))?;

    info!("User updated successfully: {}", user.id);
    Ok(ApiResponse::Ok(user))
}
