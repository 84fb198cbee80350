// MCP server entry point. Protocol frames own stdout, so logging is pinned
// to stderr.

use anyhow::Result;
use montage_mcp::{tools, McpServer};
use montage_panel::{PanelClient, PanelConfig};
use montage_relay::config::RelayConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable pointing at the shared configuration file.
const CONFIG_ENV: &str = "MONTAGE_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = PanelConfig::from_env()?;
    info!(panel_url = %config.base_url, "connecting to panel server");
    let client = PanelClient::from_config(config)?;

    // Editing calls need the same bridge the relay uses; without one the
    // in-process fallback serves an empty document.
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "montage.toml".to_string());
    let relay_config = RelayConfig::load(Path::new(&config_path))?;
    let invoker = relay_config.bridge.build_invoker();

    let registry = tools::default_registry(client, invoker);
    info!(tools = registry.len(), "tool catalog registered");

    McpServer::new(registry).start().await
}
