//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the crispapi binary.

use clap::{Parser, Subcommand};

use crate::Tier;

/// Crisp plugin API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "crispapi", about = "Crisp plugin API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests and responses to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Authentication tier (user or plugin), overriding CRISP_API_TIER.
    #[arg(long, global = true)]
    pub tier: Option<Tier>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the connected plugin session is valid.
    Session,

    /// List the websites linked to the connected plugin.
    Websites,

    /// Get plugin information.
    Plugin {
        /// The plugin ID.
        plugin_id: String,
    },

    /// Get the aggregate stars of a plugin.
    Stars {
        /// The plugin ID.
        plugin_id: String,
    },

    /// Read, set or delete your own rank of a plugin.
    Rank {
        #[command(subcommand)]
        action: RankAction,
    },
}

/// Personal rank actions.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum RankAction {
    /// Show your rank of the plugin.
    Get {
        /// The plugin ID.
        plugin_id: String,
    },

    /// Rank the plugin.
    Set {
        /// The plugin ID.
        plugin_id: String,

        /// The rank to give.
        rank: u32,
    },

    /// Delete your rank of the plugin.
    Delete {
        /// The plugin ID.
        plugin_id: String,
    },
}
