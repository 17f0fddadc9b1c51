use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::config::loaded_config;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Missing required fields")]
    MissingFields(&'static [&'static str]),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: &'a str,
    #[serde(rename = "requiredFields", skip_serializing_if = "Option::is_none")]
    required_fields: Option<&'static [&'static str]>,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::Db(_) => "DB_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return AppError::Conflict(detail);
        }
        match err {
            DbErr::RecordNotFound(what) => AppError::NotFound(what),
            other => AppError::Db(other),
        }
    }

    /// Swaps the store's duplicate-key detail for a message fit for clients.
    pub fn on_conflict(self, message: &str) -> Self {
        match self {
            Self::Conflict(_) => Self::Conflict(message.to_string()),
            other => other,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Db(e) if loaded_config().is_some_and(|c| c.is_development()) => e.to_string(),
            Self::Db(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) | Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Db(e) = self {
            error!("Store error: {e}");
        }

        let message = self.public_message();
        let required_fields = match self {
            Self::MissingFields(fields) => Some(*fields),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &message,
            required_fields,
        })
    }
}
