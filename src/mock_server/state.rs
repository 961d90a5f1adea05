//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Crisp API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{PluginInformation, PluginStars, Tier};

/// Lowest rank the API accepts.
pub const MIN_RANK: u32 = 1;

/// Highest rank the API accepts.
pub const MAX_RANK: u32 = 5;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Plugins indexed by plugin ID.
    pub plugins: HashMap<String, PluginInformation>,

    /// Aggregate stars indexed by plugin ID.
    pub stars: HashMap<String, PluginStars>,

    /// The caller's own ranks indexed by plugin ID.
    pub ranks: HashMap<String, u32>,

    /// Website IDs linked to the connected plugin, in listing order.
    pub connected_websites: Vec<String>,

    /// Whether the plugin connect session is valid.
    pub session_valid: bool,

    /// Optional basic-auth credentials. If set, requests must carry them.
    pub required_credentials: Option<(String, String)>,

    /// Optional tier. If set, requests must send it in `X-Crisp-Tier`.
    pub required_tier: Option<Tier>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a plugin to the state.
    ///
    /// Plugins without an ID are ignored.
    pub fn with_plugin(mut self, plugin: PluginInformation) -> Self {
        if let Some(id) = plugin.id.clone() {
            self.plugins.insert(id, plugin);
        }
        self
    }

    /// Set the aggregate stars of a plugin.
    pub fn with_stars(mut self, plugin_id: &str, stars: PluginStars) -> Self {
        self.stars.insert(plugin_id.to_string(), stars);
        self
    }

    /// Set the caller's rank of a plugin.
    pub fn with_rank(mut self, plugin_id: &str, rank: u32) -> Self {
        self.ranks.insert(plugin_id.to_string(), rank);
        self
    }

    /// Link a website to the connected plugin.
    pub fn with_connected_website(mut self, website_id: &str) -> Self {
        self.connected_websites.push(website_id.to_string());
        self
    }

    /// Set whether the connect session is valid.
    pub fn with_session_valid(mut self, valid: bool) -> Self {
        self.session_valid = valid;
        self
    }

    /// Set the required authentication credentials.
    pub fn with_required_credentials(mut self, identifier: &str, key: &str) -> Self {
        self.required_credentials = Some((identifier.to_string(), key.to_string()));
        self
    }

    /// Set the required authentication tier.
    pub fn with_required_tier(mut self, tier: Tier) -> Self {
        self.required_tier = Some(tier);
        self
    }

    /// Get a plugin by ID.
    pub fn get_plugin(&self, plugin_id: &str) -> Option<&PluginInformation> {
        self.plugins.get(plugin_id)
    }

    /// Get the stars of a known plugin.
    ///
    /// Returns `None` for unknown plugins; known plugins without ratings
    /// get zeroed stars.
    pub fn get_stars(&self, plugin_id: &str) -> Option<PluginStars> {
        self.plugins.get(plugin_id)?;
        Some(self.stars.get(plugin_id).copied().unwrap_or(PluginStars {
            mean: Some(0),
            total: Some(0),
        }))
    }

    /// Get the caller's rank of a plugin.
    pub fn get_rank(&self, plugin_id: &str) -> Option<u32> {
        self.ranks.get(plugin_id).copied()
    }

    /// Record the caller's rank of a known plugin.
    ///
    /// Returns false if the plugin is unknown.
    pub fn set_rank(&mut self, plugin_id: &str, rank: u32) -> bool {
        if !self.plugins.contains_key(plugin_id) {
            return false;
        }
        self.ranks.insert(plugin_id.to_string(), rank);
        true
    }

    /// Remove the caller's rank of a plugin.
    ///
    /// Returns false if the plugin is unknown.
    pub fn delete_rank(&mut self, plugin_id: &str) -> bool {
        if !self.plugins.contains_key(plugin_id) {
            return false;
        }
        self.ranks.remove(plugin_id);
        true
    }

    /// Check whether a rank is in the accepted range.
    pub fn is_valid_rank(rank: u32) -> bool {
        (MIN_RANK..=MAX_RANK).contains(&rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plugin(id: &str, name: &str) -> PluginInformation {
        PluginInformation {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_state_add_and_get_plugin() {
        let state = MockState::new().with_plugin(sample_plugin("p1", "Slack"));

        let plugin = state.get_plugin("p1");
        assert!(plugin.is_some());
        assert_eq!(plugin.unwrap().name.as_deref(), Some("Slack"));
    }

    #[test]
    fn test_state_ignores_plugin_without_id() {
        let state = MockState::new().with_plugin(PluginInformation::default());
        assert!(state.plugins.is_empty());
    }

    #[test]
    fn test_state_stars_default_to_zero() {
        let state = MockState::new().with_plugin(sample_plugin("p1", "Slack"));

        let stars = state.get_stars("p1").unwrap();
        assert_eq!(stars.mean, Some(0));
        assert_eq!(stars.total, Some(0));
        assert!(state.get_stars("unknown").is_none());
    }

    #[test]
    fn test_state_seeded_stars_and_rank() {
        let state = MockState::new()
            .with_plugin(sample_plugin("p1", "Slack"))
            .with_stars(
                "p1",
                PluginStars {
                    mean: Some(3),
                    total: Some(12),
                },
            )
            .with_rank("p1", 2);

        assert_eq!(state.get_stars("p1").unwrap().total, Some(12));
        assert_eq!(state.get_rank("p1"), Some(2));
    }

    #[test]
    fn test_state_rank_lifecycle() {
        let mut state = MockState::new().with_plugin(sample_plugin("p1", "Slack"));

        assert!(state.set_rank("p1", 4));
        assert_eq!(state.get_rank("p1"), Some(4));

        assert!(state.delete_rank("p1"));
        assert_eq!(state.get_rank("p1"), None);

        assert!(!state.set_rank("unknown", 4));
        assert!(!state.delete_rank("unknown"));
    }

    #[test]
    fn test_rank_range() {
        assert!(!MockState::is_valid_rank(0));
        assert!(MockState::is_valid_rank(1));
        assert!(MockState::is_valid_rank(5));
        assert!(!MockState::is_valid_rank(6));
    }
}
