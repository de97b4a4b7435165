mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::trivia::TriviaError;

/// Every failure leaves the server as `{"success": false, "error": <code>, "message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Unprocessable,
    MethodNotAllowed,
    BadRequest(String),
    Internal(anyhow::Error),
}

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Request resource not found",
            ApiError::Unprocessable => "Unprocessable Entity",
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::BadRequest(_) => "Bad request",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(err) => tracing::error!("Request failed: {err:#}"),
            ApiError::BadRequest(reason) => tracing::debug!("Bad request: {reason}"),
            _ => {}
        }
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::NotFound => ApiError::NotFound,
            TriviaError::Unprocessable(_) => ApiError::Unprocessable,
            TriviaError::Database(err) => ApiError::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
