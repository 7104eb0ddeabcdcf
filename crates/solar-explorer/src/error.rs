//! Error types for the explorer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Explorer errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset fetch answered with a non-success status
    #[error("Dataset request to '{url}' failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV cell could not be cast to its schema type
    #[error("Row {row}, column '{column}': {message}")]
    CsvField {
        row: usize,
        column: String,
        message: String,
    },

    /// Chart drawing failed
    #[error("Chart error: {0}")]
    Chart(String),

    /// Unknown sort field name
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// Unknown sort direction
    #[error("Unknown sort direction: {0} (expected 'asc' or 'desc')")]
    UnknownSortDirection(String),

    /// Named body is not in the dataset
    #[error("Body not found: {0}")]
    BodyNotFound(String),

    /// Dataset failed to load at startup
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a CSV field error
    pub fn csv_field(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CsvField {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            Error::Json(_) => (StatusCode::INTERNAL_SERVER_ERROR, "json_error"),
            Error::Http(_) | Error::HttpStatus { .. } => (StatusCode::BAD_GATEWAY, "http_error"),
            Error::Csv(_) | Error::CsvField { .. } => (StatusCode::BAD_REQUEST, "csv_error"),
            Error::Chart(_) => (StatusCode::INTERNAL_SERVER_ERROR, "chart_error"),
            Error::UnknownSortField(_) | Error::UnknownSortDirection(_) => {
                (StatusCode::BAD_REQUEST, "invalid_sort")
            }
            Error::BodyNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::DatasetUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "dataset_unavailable")
            }
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
