// MCP (Model Context Protocol) server for Premiere Pro.
// Advertises a fixed tool catalog and routes each call to the control-plane
// panel server or the host-scripting bridge.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
