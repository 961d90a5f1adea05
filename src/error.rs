//! Error types for Crisp API operations.

use reqwest::StatusCode;
use thiserror::Error;

use crate::response::ResponseMeta;

/// Errors that can occur during Crisp API operations.
#[derive(Debug, Error)]
pub enum CrispError {
    /// Configuration is missing or incomplete.
    #[error("Crisp configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration value could not be understood.
    #[error("Invalid Crisp configuration: {0}")]
    InvalidConfig(String),

    /// The API answered with a non-2xx status.
    #[error("Crisp API error ({}): {reason}", .meta.status)]
    Api {
        /// Status and headers of the failed response.
        meta: ResponseMeta,
        /// Reason reported by the API, or the raw body when it sent none.
        reason: String,
    },

    /// The response body could not be decoded into the requested type.
    #[error("Failed to decode response ({}): {source}", .meta.status)]
    Decode {
        /// Status and headers of the response that failed to decode.
        meta: ResponseMeta,
        source: serde_json::Error,
    },

    /// The server answered but the response body could not be read.
    #[error("Failed to read response body ({}): {source}", .meta.status)]
    Body {
        /// Status and headers of the response whose body was cut short.
        meta: ResponseMeta,
        source: reqwest::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl CrispError {
    /// The response descriptor, when the server answered at all.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            Self::Api { meta, .. } | Self::Decode { meta, .. } | Self::Body { meta, .. } => {
                Some(meta)
            }
            _ => None,
        }
    }

    /// Status code of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpError(e) => e.status(),
            _ => self.response().map(|meta| meta.status),
        }
    }

    /// Whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Result type alias for Crisp operations.
pub type Result<T> = core::result::Result<T, CrispError>;
