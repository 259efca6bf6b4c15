use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calorielens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "E_PAYLOAD_TOO_LARGE"),
            ApiError::Unauthorized(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM_UNAUTHORIZED"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidImage(_) => ApiError::BadRequest(error.to_string()),
            CoreError::ImageTooLarge { .. } => ApiError::PayloadTooLarge(error.to_string()),
            // The upstream credential is ours, not the caller's.
            CoreError::Unauthorized(_) => ApiError::Unauthorized(error.to_string()),
            CoreError::ExternalServiceError(_) | CoreError::EmptyCompletion => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::Encoding(_) | CoreError::InvalidConfig(_) => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        (
            status,
            Json(ApiErrorResponse {
                code: code.to_string(),
                status: status.as_u16(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::InvalidImage("bad".into()), StatusCode::BAD_REQUEST),
            (
                CoreError::ImageTooLarge { size: 11, max: 10 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (CoreError::Unauthorized("401".into()), StatusCode::BAD_GATEWAY),
            (
                CoreError::ExternalServiceError("down".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::EmptyCompletion, StatusCode::BAD_GATEWAY),
            (
                CoreError::Encoding("jpeg".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_message_keeps_core_description() {
        let error = ApiError::from(CoreError::InvalidImage("not a png".into()));
        assert_eq!(error.to_string(), "Invalid image: not a png");
    }
}
