//! Plugin connect operations: session validity and linked websites.

use reqwest::Method;

use crate::client::CrispClient;
use crate::error::Result;
use crate::response::{ApiResponse, ResponseMeta};

/// Check whether the connected plugin session is valid.
///
/// Issues a HEAD request; only the status matters. `Ok` means valid, any
/// error means invalid (including transport failures).
///
/// # Errors
///
/// Returns an error if the server answers with a non-2xx status or the
/// request fails.
#[tracing::instrument(skip(client))]
pub async fn check_connect_session_validity(client: &CrispClient) -> Result<ResponseMeta> {
    client
        .send::<()>(Method::HEAD, "plugin/connect/session", None)
        .await
}

/// Convenience wrapper over [`check_connect_session_validity`] that
/// collapses the outcome into a boolean.
pub async fn is_connect_session_valid(client: &CrispClient) -> bool {
    check_connect_session_validity(client).await.is_ok()
}

/// List the website IDs linked to the connected plugin.
///
/// # Example
///
/// ```ignore
/// let websites = list_connect_websites(&client).await?;
/// for website_id in websites.data.unwrap_or_default() {
///     println!("{website_id}");
/// }
/// ```
///
/// # Errors
///
/// Returns an error if the server answers with a non-2xx status, the
/// response cannot be decoded, or the request fails.
#[tracing::instrument(skip(client))]
pub async fn list_connect_websites(client: &CrispClient) -> Result<ApiResponse<Vec<String>>> {
    client.fetch_data("plugin/connect/websites").await
}
