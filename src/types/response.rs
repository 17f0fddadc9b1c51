use serde::{Deserialize, Serialize};
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

/// Success side of every handler. Errors go through `AppError`.
pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Body returned by every delete route.
#[derive(Serialize, Deserialize, Debug)]
pub struct DeletedRes {
    pub message: String,
    pub id: String,
}

/// `?q=` on the list routes.
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// The search term, lowercased, or `None` when blank.
    pub fn term(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// Case-insensitive substring match against any of `fields`. `term` must
/// already be lowercase.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(term))
}
