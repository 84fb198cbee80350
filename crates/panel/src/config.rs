//! Configuration for the panel client.

use crate::error::{PanelError, PanelResult};
use std::time::Duration;
use url::Url;

/// Default address of the CEP panel's HTTP server.
pub const DEFAULT_PANEL_URL: &str = "http://127.0.0.1:3001";

/// Environment variable overriding the panel server address.
pub const PANEL_URL_ENV: &str = "MONTAGE_PANEL_URL";

/// Configuration for the panel client.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the control-plane server.
    pub base_url: Url,
    /// Request timeout, 30 seconds unless overridden.
    pub timeout: Duration,
}

impl PanelConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build a configuration from the environment, falling back to the
    /// default local panel address.
    pub fn from_env() -> PanelResult<Self> {
        let url = std::env::var(PANEL_URL_ENV).unwrap_or_else(|_| DEFAULT_PANEL_URL.to_string());
        let base_url = Url::parse(&url)
            .map_err(|e| PanelError::Config(format!("invalid {}: {}", PANEL_URL_ENV, e)))?;
        Ok(Self::new(base_url))
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_PANEL_URL).expect("default panel URL parses"))
    }
}
