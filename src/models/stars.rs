//! Plugin ratings: aggregate stars and the caller's own rank.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::CrispClient;
use crate::error::Result;
use crate::response::{ApiResponse, ResponseMeta};
use crate::traits::Get;

/// Aggregate user rating of a plugin.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginStars {
    /// Mean rank.
    pub mean: Option<u32>,
    /// Number of ranks given.
    pub total: Option<u32>,
}

impl PluginStars {
    /// Returns true if no field is populated.
    pub fn is_empty(&self) -> bool {
        self.mean.is_none() && self.total.is_none()
    }
}

/// The rank the calling identity gave a plugin.
///
/// Also used as the request body when ranking; build a fresh value with
/// [`PersonalPluginRank::new`] rather than editing a fetched one.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalPluginRank {
    /// The rank, absent if the caller never ranked the plugin.
    pub rank: Option<u32>,
}

impl PersonalPluginRank {
    /// A rank request body.
    #[must_use]
    pub fn new(rank: u32) -> Self {
        Self { rank: Some(rank) }
    }
}

/// Payload of the stars endpoint.
///
/// Stars normally arrive nested as `{"stars": {...}}`; a flat
/// `{"mean": .., "total": ..}` is accepted too.
#[derive(Debug, Deserialize)]
struct StarsData {
    #[serde(default)]
    stars: Option<PluginStars>,
    #[serde(flatten)]
    flat: PluginStars,
}

impl StarsData {
    fn into_stars(self) -> Option<PluginStars> {
        self.stars
            .or_else(|| (!self.flat.is_empty()).then_some(self.flat))
    }
}

fn rank_path(plugin_id: &str) -> String {
    format!("plugin/{plugin_id}/stars/self")
}

#[async_trait]
impl Get for PluginStars {
    type Id = String; // Plugin ID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CrispClient, plugin_id: String) -> Result<ApiResponse<Self>> {
        let response = client
            .fetch_data::<StarsData>(&format!("plugin/{plugin_id}/stars"))
            .await?;
        Ok(response.and_then(StarsData::into_stars))
    }
}

#[async_trait]
impl Get for PersonalPluginRank {
    type Id = String; // Plugin ID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CrispClient, plugin_id: String) -> Result<ApiResponse<Self>> {
        client.fetch_data(&rank_path(&plugin_id)).await
    }
}

/// Rank a plugin as the calling identity.
///
/// Sends `{"rank": N}`; the response body is not decoded.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the rank.
#[tracing::instrument(skip(client))]
pub async fn rank_plugin(client: &CrispClient, plugin_id: &str, rank: u32) -> Result<ResponseMeta> {
    let body = PersonalPluginRank::new(rank);
    client
        .send(Method::PATCH, &rank_path(plugin_id), Some(&body))
        .await
}

/// Delete the calling identity's rank of a plugin.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
#[tracing::instrument(skip(client))]
pub async fn delete_plugin_rank(client: &CrispClient, plugin_id: &str) -> Result<ResponseMeta> {
    client
        .send::<()>(Method::DELETE, &rank_path(plugin_id), None)
        .await
}
