use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request body was not valid JSON for the expected payload.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedPayload(rejection) => rejection.status(),
        };
        warn!(error = %self, %status, "request rejected");

        (status, self.to_string()).into_response()
    }
}
