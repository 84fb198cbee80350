// Stdio JSON-RPC server loop and request routing

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures::{SinkExt, StreamExt};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info, warn};

/// MCP server speaking newline-delimited JSON-RPC 2.0 on stdin/stdout.
///
/// stdout carries protocol frames only; all diagnostics go to the tracing
/// subscriber (stderr).
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Read requests line by line until stdin closes.
    pub async fn start(&self) -> Result<()> {
        let mut reader = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        let mut writer = FramedWrite::new(tokio::io::stdout(), LinesCodec::new());

        info!(tools = self.registry.len(), "MCP server ready");

        while let Some(line) = reader.next().await {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                writer.send(serde_json::to_string(&response)?).await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw request line. Returns `None` for notifications, which
    /// must not receive a response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable request line");
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        debug!(method = %request.method, "handling request");

        if request.method.starts_with("notifications/") {
            return None;
        }

        let id = request.id.clone().unwrap_or(serde_json::Value::Null);
        let params = request.params.unwrap_or(serde_json::Value::Null);

        let response = match request.method.as_str() {
            "initialize" => {
                // Client info is logged when present but never required.
                if let Ok(init) = serde_json::from_value::<InitializeParams>(params) {
                    info!(
                        client = %init.client_info.name,
                        version = %init.client_info.version,
                        "client connected"
                    );
                }
                JsonRpcResponse::success(
                    id,
                    InitializeResult {
                        protocol_version: PROTOCOL_VERSION.to_string(),
                        capabilities: ServerCapabilities {
                            tools: Some(ToolsCapability {
                                list_changed: false,
                            }),
                        },
                        server_info: ServerInfo {
                            name: "montage-mcp".to_string(),
                            version: env!("CARGO_PKG_VERSION").to_string(),
                        },
                    },
                )
            }
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => match serde_json::from_value::<CallToolParams>(params) {
                Ok(call) => JsonRpcResponse::success(id, self.dispatch(call).await),
                Err(e) => JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string())),
            },
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };

        Some(response)
    }

    /// Run a tool call. Tool failures are reported as error-flagged results,
    /// never as JSON-RPC errors, so the client can show them to the model.
    async fn dispatch(&self, params: CallToolParams) -> CallToolResult {
        let Some(tool) = self.registry.get(&params.name) else {
            return CallToolResult::error(format!("❌ Unknown tool: {}", params.name));
        };

        match tool.execute(params.arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool execution failed");
                CallToolResult::error(format!("❌ Error executing {}: {}", params.name, e))
            }
        }
    }
}
