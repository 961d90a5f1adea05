//! Plugin information model.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::CrispClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::traits::Get;

/// Public information about a Crisp plugin.
///
/// Every field is optional: the API omits fields it has no value for, and
/// an absent field is kept distinct from an empty or zero one.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginInformation {
    /// The plugin ID.
    pub id: Option<String>,

    /// The plugin URN (e.g., "urn:crisp.im:example:0").
    pub urn: Option<String>,

    /// Plugin type (e.g., "integration", "widget").
    #[serde(rename = "type")]
    pub plugin_type: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Short description.
    pub description: Option<String>,

    /// Feature bullet points.
    pub features: Option<Vec<String>>,

    /// Showcase image URLs.
    pub showcase: Option<Vec<String>>,

    /// Monthly price in cents; zero for free plugins.
    pub price: Option<u32>,

    /// Brand color.
    pub color: Option<String>,

    /// Icon URL.
    pub icon: Option<String>,

    /// Banner URL.
    pub banner: Option<String>,

    /// When the plugin was created, as sent by the API.
    pub since: Option<String>,
}

impl PluginInformation {
    /// Returns true if the plugin is free (price known to be zero).
    pub fn is_free(&self) -> bool {
        self.price == Some(0)
    }

    /// Best available label for display: name, then URN, then ID.
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.urn.as_deref())
            .or(self.id.as_deref())
    }

    /// The creation marker parsed as an RFC 3339 timestamp.
    ///
    /// Returns `None` when `since` is absent or not in that format; the raw
    /// value stays available in [`PluginInformation::since`].
    pub fn since_datetime(&self) -> Option<DateTime<Utc>> {
        let since = self.since.as_deref()?;
        DateTime::parse_from_rfc3339(since)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[async_trait]
impl Get for PluginInformation {
    type Id = String; // Plugin ID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CrispClient, plugin_id: String) -> Result<ApiResponse<Self>> {
        client.fetch_data(&format!("plugin/{plugin_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_plugin() {
        let plugin: PluginInformation = serde_json::from_value(serde_json::json!({
            "id": "c64f3595-adee-425a-8d3a-89d47f7ed6bb",
            "urn": "urn:crisp.im:slack:0",
            "type": "integration",
            "name": "Slack",
            "description": "Reply to chats from Slack.",
            "features": ["Two-way sync"],
            "showcase": [],
            "price": 0,
            "color": "#4A154B",
            "icon": "https://example.com/icon.png",
            "banner": "https://example.com/banner.png",
            "since": "2017-04-21T10:13:15.000Z"
        }))
        .unwrap();

        assert_eq!(plugin.plugin_type.as_deref(), Some("integration"));
        assert_eq!(plugin.features, Some(vec!["Two-way sync".to_string()]));
        assert_eq!(plugin.showcase, Some(vec![]));
        assert!(plugin.is_free());
        assert_eq!(
            plugin.since_datetime().unwrap().to_rfc3339(),
            "2017-04-21T10:13:15+00:00"
        );

        // The raw marker is kept as sent
        let json = serde_json::to_value(&plugin).unwrap();
        assert_eq!(json["since"], "2017-04-21T10:13:15.000Z");
    }

    #[test]
    fn test_non_rfc3339_since_still_decodes() {
        let plugin: PluginInformation = serde_json::from_value(serde_json::json!({
            "name": "Slack",
            "since": "2017-04-21"
        }))
        .unwrap();

        assert_eq!(plugin.since.as_deref(), Some("2017-04-21"));
        assert!(plugin.since_datetime().is_none());
        assert_eq!(plugin.label(), Some("Slack"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let plugin: PluginInformation =
            serde_json::from_value(serde_json::json!({ "name": "Slack" })).unwrap();

        assert_eq!(plugin.label(), Some("Slack"));
        assert!(plugin.price.is_none());
        assert!(!plugin.is_free());
        assert!(plugin.features.is_none());

        // Absent fields are omitted, never serialized as null
        let json = serde_json::to_value(&plugin).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Slack" }));
    }

    #[test]
    fn test_type_field_renamed() {
        let plugin = PluginInformation {
            plugin_type: Some("widget".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&plugin).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "widget" }));
    }
}
