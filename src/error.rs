use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Everything the classify endpoint can answer with besides a verdict.
/// The carried detail of `Processing` goes to the log, never to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,

    #[error("Failed to classify image")]
    Processing(String),
}

impl ApiError {
    pub fn processing(cause: impl std::fmt::Display) -> Self {
        ApiError::Processing(cause.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Processing(cause) = self {
            tracing::error!("classification failed: {}", cause);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
