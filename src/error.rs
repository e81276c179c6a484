//! Error types
//!
//! Only startup can fail. Request handling never returns an error: an
//! unmatched request is answered with 404.

use hyper::Method;
use thiserror::Error;

/// Two rules registered for the same method and path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate route: {method} {path}")]
pub struct DuplicateRouteError {
    pub method: Method,
    pub path: String,
}

pub type AppResult<T, E = AppError> = Result<T, E>;

/// Fatal startup error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Route(#[from] DuplicateRouteError),

    #[error("failed to encode route body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid listen address: {0}")]
    Address(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
