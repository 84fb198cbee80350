//! Relay configuration.

use crate::invoker::{CommandInvoker, HostScriptInvoker};
use crate::script_host::ProjectScriptHost;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// How host-script calls reach the scripting engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge executable invoked per call. When absent the relay runs with
    /// the in-process script host over an empty project document.
    pub command: Option<PathBuf>,

    /// Fixed arguments passed before the function name (e.g. a .jsx path).
    #[serde(default)]
    pub args: Vec<String>,
}

impl BridgeConfig {
    /// Select the host-script invoker for this configuration: the bridge
    /// executable when one is configured, otherwise the in-process script
    /// host (headless and test runs).
    pub fn build_invoker(&self) -> Arc<dyn HostScriptInvoker> {
        match &self.command {
            Some(command) => {
                tracing::info!("Using host bridge command: {}", command.display());
                Arc::new(
                    CommandInvoker::new(command.clone()).with_leading_args(self.args.clone()),
                )
            }
            None => {
                tracing::warn!("No bridge command configured, using in-process script host");
                Arc::new(ProjectScriptHost::default())
            }
        }
    }
}

impl RelayConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bridge_config() {
        let config: RelayConfig = toml::from_str(
            r#"
            [bridge]
            command = "/usr/local/bin/cep-bridge"
            args = ["trimClipByFrames.jsx"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.bridge.command.as_deref(),
            Some(Path::new("/usr/local/bin/cep-bridge"))
        );
        assert_eq!(config.bridge.args, vec!["trimClipByFrames.jsx"]);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert!(config.bridge.command.is_none());
    }

    #[tokio::test]
    async fn test_configured_bridge_handles_invocations() {
        let config = BridgeConfig {
            command: Some(PathBuf::from("sh")),
            args: vec![
                "-c".to_string(),
                "echo '{\"success\": true}'".to_string(),
            ],
        };

        let invoker = config.build_invoker();
        let result = invoker.invoke("trimClipByFrames", &[]).await.unwrap();
        assert_eq!(result, serde_json::json!({"success": true}));
    }

    #[tokio::test]
    async fn test_unconfigured_bridge_falls_back_to_script_host() {
        let invoker = BridgeConfig::default().build_invoker();
        let args = vec![
            serde_json::json!(0),
            serde_json::json!("clip-1"),
            serde_json::json!(1),
            serde_json::json!("in"),
            serde_json::json!("video"),
        ];

        // Empty document: the call is handled, not refused.
        let result = invoker.invoke("trimClipByFrames", &args).await.unwrap();
        assert_eq!(
            result,
            serde_json::json!({"success": false, "error": "Sequence not found"})
        );
    }
}
