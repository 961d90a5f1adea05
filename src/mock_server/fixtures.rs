//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{PluginInformation, PluginStars};

/// ID of the plugin present in the default scenario.
pub const DEFAULT_PLUGIN_ID: &str = "c64f3595-adee-425a-8d3a-89d47f7ed6bb";

/// ID of the unranked, unrated plugin present in the default scenario.
pub const UNRATED_PLUGIN_ID: &str = "8780a1c6-2a1a-4ac4-a7a0-d06b4e4a3b2e";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal plugin with an ID and name only.
    pub fn minimal_plugin(plugin_id: &str, name: &str) -> PluginInformation {
        PluginInformation {
            id: Some(plugin_id.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Create a fully populated plugin.
    pub fn full_plugin(plugin_id: &str, name: &str, price: u32) -> PluginInformation {
        let slug = name.to_lowercase().replace(' ', "-");
        PluginInformation {
            id: Some(plugin_id.to_string()),
            urn: Some(format!("urn:crisp.im:{slug}:0")),
            plugin_type: Some("integration".to_string()),
            name: Some(name.to_string()),
            description: Some(format!("{name} integration for Crisp.")),
            features: Some(vec![
                "Two-way sync".to_string(),
                "Real-time notifications".to_string(),
            ]),
            showcase: Some(vec![format!("https://cdn.example.com/{slug}/showcase-1.png")]),
            price: Some(price),
            color: Some("#1972F5".to_string()),
            icon: Some(format!("https://cdn.example.com/{slug}/icon.png")),
            banner: Some(format!("https://cdn.example.com/{slug}/banner.png")),
            since: Some("2017-04-21T10:13:15.000Z".to_string()),
        }
    }

    /// Create aggregate stars.
    pub fn stars(mean: u32, total: u32) -> PluginStars {
        PluginStars {
            mean: Some(mean),
            total: Some(total),
        }
    }

    /// Get the default test scenario.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// Default scenario: one rated and ranked plugin, one bare plugin, two
/// connected websites and a valid session.
pub struct DefaultScenario {
    pub plugins: Vec<PluginInformation>,
    pub stars: Vec<(String, PluginStars)>,
    pub ranks: Vec<(String, u32)>,
    pub connected_websites: Vec<String>,
    pub session_valid: bool,
}

impl DefaultScenario {
    fn new() -> Self {
        Self {
            plugins: vec![
                Fixtures::full_plugin(DEFAULT_PLUGIN_ID, "Test Plugin", 0),
                Fixtures::minimal_plugin(UNRATED_PLUGIN_ID, "Unrated Plugin"),
            ],
            stars: vec![(DEFAULT_PLUGIN_ID.to_string(), Fixtures::stars(4, 128))],
            ranks: vec![(DEFAULT_PLUGIN_ID.to_string(), 5)],
            connected_websites: vec![
                "8c842203-7ed8-4e29-a608-7cf78a7d2fcc".to_string(),
                "42ab7b07-0a7f-4a2b-a2b8-28e7d5a8c1d0".to_string(),
            ],
            session_valid: true,
        }
    }
}
