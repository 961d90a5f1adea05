//! Client configuration.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::{CrispError, Result};

/// Default base URL of the Crisp REST API.
pub const DEFAULT_API_URL: &str = "https://api.crisp.chat/v1/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authentication tier, sent as the `X-Crisp-Tier` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Credentials belong to a user account.
    #[default]
    User,
    /// Credentials belong to a plugin.
    Plugin,
}

impl Tier {
    /// The header value for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CrispError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "plugin" => Ok(Self::Plugin),
            other => Err(CrispError::InvalidConfig(format!(
                "unknown tier '{other}', expected 'user' or 'plugin'"
            ))),
        }
    }
}

/// Settings used to build a [`CrispClient`](crate::CrispClient).
///
/// The key is held as a [`SecretString`] and never shows up in `Debug`
/// output.
///
/// # Example
///
/// ```
/// use crispapi::{CrispConfig, Tier};
///
/// let config = CrispConfig::new("identifier", "key").with_tier(Tier::Plugin);
/// assert_eq!(config.tier, Tier::Plugin);
/// ```
#[derive(Clone)]
pub struct CrispConfig {
    /// Token identifier (basic auth username).
    pub identifier: String,
    /// Token key (basic auth password).
    pub key: SecretString,
    /// Authentication tier.
    pub tier: Tier,
    /// Base URL of the API.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl fmt::Debug for CrispConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrispConfig")
            .field("identifier", &self.identifier)
            .field("tier", &self.tier)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CrispConfig {
    /// Configuration with the given credentials and default settings.
    pub fn new(identifier: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            key: SecretString::from(key.into()),
            tier: Tier::default(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the authentication tier.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from environment variables.
    ///
    /// - `CRISP_API_IDENTIFIER` (required)
    /// - `CRISP_API_KEY` (required)
    /// - `CRISP_API_TIER` (optional, `user` or `plugin`)
    /// - `CRISP_API_URL` (optional, defaults to [`DEFAULT_API_URL`])
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is unset or the tier is
    /// not recognized.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CrispError::ConfigMissing(format!("{name} environment variable not set")))
        };

        let mut config = Self::new(required("CRISP_API_IDENTIFIER")?, required("CRISP_API_KEY")?);

        if let Some(tier) = lookup("CRISP_API_TIER") {
            config.tier = tier.parse()?;
        }
        if let Some(url) = lookup("CRISP_API_URL") {
            config.base_url = url;
        }

        Ok(config)
    }
}
