use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Everything that can go wrong while serving a request.
///
/// All variants are rendered the same way to the user: one generic error
/// panel showing the error text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Unsupported image type: {0} (expected JPEG or PNG)")]
    UnsupportedImage(String),

    #[error("Could not read image: {0}")]
    InvalidImage(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Description failed: {0}")]
    Describe(String),

    #[error("Translation failed: {0}")]
    Translate(String),

    #[error("Nothing to download yet")]
    NothingToExport,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::UnsupportedImage(_)
            | AppError::InvalidImage(_)
            | AppError::UnknownScenario(_)
            | AppError::UnknownLanguage(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Describe(_) | AppError::Translate(_) => StatusCode::BAD_GATEWAY,
            AppError::NothingToExport => StatusCode::NOT_FOUND,
        }
    }

    /// The text shown in the UI error panel.
    pub fn user_message(&self) -> String {
        format!("⚠️ Error: {}", self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}
