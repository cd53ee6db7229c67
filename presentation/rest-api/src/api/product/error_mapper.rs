use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_empty",
            ),
            ProductError::InvalidKey => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_key",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(RepositoryError::Unavailable) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.unavailable",
            ),
            ProductError::Repository(RepositoryError::InvalidPayload) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.invalid_payload",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
