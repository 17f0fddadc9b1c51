use actix_web::{post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::types::user::RUserCreate;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserModel> {
    info!("Creating new user with data: {:?}", body);
    let payload = body.into_inner().validate()?;

    let user = db
        .create_user(payload)
        .await
        .inspect_err(|e| error!("Error saving user: {e}"))?;

    info!("User created successfully: {}", user.id);
    Ok(ApiResponse::Created(user))
}
