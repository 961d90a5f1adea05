//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{PersonalPluginRank, PluginInformation, PluginStars};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for PluginInformation {
    fn pretty_print(&self) -> String {
        let header = format!("Plugin: {}", self.label().unwrap_or("(unnamed)"));
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        let fields = [
            ("ID", &self.id),
            ("URN", &self.urn),
            ("Type", &self.plugin_type),
            ("Description", &self.description),
            ("Color", &self.color),
            ("Icon", &self.icon),
            ("Banner", &self.banner),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                lines.push(format!("{:<16}{}", format!("{label}:"), value));
            }
        }

        match self.price {
            Some(0) => lines.push("Price:          free".to_string()),
            Some(price) => lines.push(format!("Price:          {price}")),
            None => {}
        }

        if let Some(ref features) = self.features {
            if !features.is_empty() {
                lines.push(format!("Features:       {}", features.join(", ")));
            }
        }

        if let Some(ref showcase) = self.showcase {
            if !showcase.is_empty() {
                lines.push(format!("Showcase:       {}", showcase.join(", ")));
            }
        }

        if let Some(ref since) = self.since {
            match self.since_datetime() {
                Some(dt) => lines.push(format!("Since:          {}", dt.format("%Y-%m-%d %H:%M:%S UTC"))),
                None => lines.push(format!("Since:          {since}")),
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for PluginStars {
    fn pretty_print(&self) -> String {
        let show = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
        format!("Stars: {} mean over {} ranks", show(self.mean), show(self.total))
    }
}

impl PrettyPrint for PersonalPluginRank {
    fn pretty_print(&self) -> String {
        match self.rank {
            Some(rank) => format!("Rank: {rank}"),
            None => "Rank: not ranked".to_string(),
        }
    }
}
