//! Response descriptors and the `{"data": ...}` envelope.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Status and headers of a Crisp API response.
///
/// Returned alongside decoded payloads, and carried inside
/// [`CrispError`](crate::CrispError) when the request failed after the
/// server answered.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// Capture the descriptor of a response without consuming its body.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Look up a header value as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// The one-field wrapper the API puts around every payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// An unwrapped payload together with the response it came from.
///
/// `data` is `None` when the server sent an empty body or omitted the
/// `data` field.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The unwrapped payload.
    pub data: Option<T>,
    /// Status and headers of the response.
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    /// Create a response from a payload and its descriptor.
    #[must_use]
    pub fn new(data: Option<T>, meta: ResponseMeta) -> Self {
        Self { data, meta }
    }

    /// Map the payload to a different type.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            meta: self.meta,
        }
    }

    /// Map the payload through a function that may find nothing, e.g. to
    /// unwrap an object nested one level deeper.
    #[must_use]
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.and_then(f),
            meta: self.meta,
        }
    }

    /// Returns the payload, dropping the descriptor.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
