//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use clientele_domain::error::ClienteleError;
use clientele_domain::validate::ValidationErrors;

/// JSON body for message-only error responses.
#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// JSON body for validation failures: envelope message plus the per-field
/// violation map.
#[derive(Serialize)]
struct ValidationBody {
    message: &'static str,
    errors: ValidationErrors,
}

/// Maps [`ClienteleError`] to an HTTP response with appropriate status code.
pub struct ApiError(ClienteleError);

impl From<ClienteleError> for ApiError {
    fn from(err: ClienteleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ClienteleError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    message: "The given data was invalid.",
                    errors,
                }),
            )
                .into_response(),
            ClienteleError::NotFound(err) => {
                tracing::debug!(error = %err, "record not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageBody {
                        message: "Record not found.",
                    }),
                )
                    .into_response()
            }
            ClienteleError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
