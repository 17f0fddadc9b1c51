use actix_web::{post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_id;

/// Flips a user between active and inactive.
#[post("/{id}/toggle-status")]
async fn toggle_status(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<UserModel> {
    let id = parse_id(&path)?;

    let user = db
        .toggle_user_active(id)
        .await
        .inspect_err(|e| error!("Error toggling user status: {e}"))?;

    info!("User {} is now {}", user.id, if user.active { "active" } else { "inactive" });
    Ok(ApiResponse::Ok(user))
}
