//! Error types for the visualization service.

use algolab_steps::{AlgorithmKind, InputError};
use algolab_structures::StructureError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving the lab.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected algorithm input
    #[error(transparent)]
    Input(#[from] InputError),

    /// Rejected structure operation
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// Path names no known algorithm
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Input body is for a different algorithm than the path
    #[error("Input is for {input}, but the request targets {path}")]
    KindMismatch {
        path: AlgorithmKind,
        input: AlgorithmKind,
    },

    /// Only the array algorithms can load a random input
    #[error("No random input for {0}")]
    NoRandomInput(AlgorithmKind),

    /// Body missing, not JSON, or not the expected shape
    #[error("{}", .0.body_text())]
    BadRequest(#[from] JsonRejection),

    /// Bad environment or argument
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Input(_) | Error::Structure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::UnknownAlgorithm(_) => StatusCode::NOT_FOUND,
            Error::KindMismatch { .. } | Error::NoRandomInput(_) => StatusCode::BAD_REQUEST,
            Error::BadRequest(rejection) => rejection.status(),
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
