use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CatalogError::ProductNotFound
            | CatalogError::BannerNotFound
            | CatalogError::SessionNotFound => StatusCode::NOT_FOUND,
            // A bad handle is a deployment problem, not a client one
            CatalogError::Contact(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let name = match status {
            StatusCode::NOT_FOUND => "NotFound",
            _ => "InternalError",
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
