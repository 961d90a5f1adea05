//! Crisp plugin API client library.
//!
//! A Rust library for the plugin endpoints of the Crisp REST API. Every
//! operation maps to exactly one HTTP call: a verb, a path, an optional
//! JSON body, and a `{"data": ...}` envelope unwrapped into a typed
//! payload.
//!
//! # Quick Start
//!
//! ```no_run
//! use crispapi::{CrispClient, Get, PluginInformation, PluginStars};
//!
//! #[tokio::main]
//! async fn main() -> crispapi::Result<()> {
//!     // Create client from environment variables
//!     let client = CrispClient::from_env()?;
//!
//!     // Is the plugin connect session still valid?
//!     crispapi::check_connect_session_validity(&client).await?;
//!
//!     // Websites linked to the connected plugin
//!     let websites = crispapi::list_connect_websites(&client).await?;
//!     println!("Linked to {} websites", websites.data.unwrap_or_default().len());
//!
//!     // Plugin details and rating
//!     let plugin_id = "c64f3595-adee-425a-8d3a-89d47f7ed6bb".to_string();
//!     let plugin = PluginInformation::get(&client, plugin_id.clone()).await?;
//!     let stars = PluginStars::get(&client, plugin_id).await?;
//!     println!("{:?} rated {:?}", plugin.data, stars.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`CrispClient`] is the transport: it authenticates, sends, checks the
//!   status and decodes JSON. Every result carries a [`ResponseMeta`]
//!   (status and headers), and errors carry it too when the server
//!   answered.
//! - [`Get`] is implemented by the entities fetched by plugin ID.
//! - Operations without a natural entity (session check, website list,
//!   ranking) are free functions.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CRISP_API_IDENTIFIER` (required) - Token identifier
//! - `CRISP_API_KEY` (required) - Token key
//! - `CRISP_API_TIER` (optional) - `user` (default) or `plugin`
//! - `CRISP_API_URL` (optional) - Base URL (defaults to `https://api.crisp.chat/v1/`)

pub mod cli;
mod client;
mod config;
mod error;
mod models;
pub mod output;
mod response;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{CrispClient, TIER_HEADER};
pub use config::{CrispConfig, Tier, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::{CrispError, Result};
pub use response::{ApiResponse, Envelope, ResponseMeta};

// Re-export traits
pub use traits::Get;

// Re-export models
pub use models::{PersonalPluginRank, PluginInformation, PluginStars};

// Re-export resource operations
pub use models::{check_connect_session_validity, is_connect_session_valid, list_connect_websites};
pub use models::{delete_plugin_rank, rank_plugin};

// Re-export HTTP types used in signatures
pub use reqwest::{Method, StatusCode};
