//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::CrispClient;
use crate::error::Result;
use crate::response::ApiResponse;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by an identifier interpolated into the endpoint path.
///
/// # Example
///
/// ```ignore
/// use crispapi::{CrispClient, Get, PluginInformation};
///
/// let client = CrispClient::from_env()?;
/// let plugin = PluginInformation::get(&client, "plugin-id".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized + Send {
    /// The ID type for this entity (e.g., a plugin ID string).
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// The payload is `None` when the server answered successfully but
    /// sent no data.
    ///
    /// # Errors
    ///
    /// Returns an error if the server answers with a non-2xx status, the
    /// response cannot be decoded, or the request fails.
    async fn get(client: &CrispClient, id: Self::Id) -> Result<ApiResponse<Self>>;
}
