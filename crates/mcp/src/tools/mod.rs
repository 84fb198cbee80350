// Tool implementations for the Premiere Pro catalog

pub mod edit;
pub mod export;
pub mod media;
pub mod project;
pub mod sequence;
pub mod timeline;
mod registry;

pub use edit::TrimClipTool;
pub use export::{ExportPresetsTool, ExportProjectTool, RenderQueueTool};
pub use media::ProjectMediaTool;
pub use project::{ListSequencesTool, ProjectBinsTool, ProjectInfoTool};
pub use registry::{
    json_schema_boolean, json_schema_enum, json_schema_number, json_schema_object,
    json_schema_string, Tool, ToolRegistry,
};
pub use sequence::{ActiveSequenceTool, CreateSequenceTool, SequenceDetailsTool};
pub use timeline::{PlayheadTool, SelectionTool, TimelineClipsTool, TimelineStructureTool};

use crate::protocol::CallToolResult;
use montage_panel::{PanelClient, PanelError};
use montage_relay::HostScriptInvoker;
use std::sync::Arc;

/// Render a panel-reported condition (e.g. "no active sequence").
///
/// Protocol-level success with nothing to report, so the result carries no
/// error flag and quotes the panel's message verbatim.
pub(crate) fn panel_condition(message: &str) -> CallToolResult {
    CallToolResult::text(format!("⚠️  {}", message))
}

/// Render a transport-level failure reaching the panel server.
pub(crate) fn panel_failure(action: &str, err: &PanelError) -> CallToolResult {
    CallToolResult::error(format!(
        "❌ **Failed to {}**\n\nError: {}\n\n🔧 **Troubleshooting:**\n\
         1. Ensure Premiere Pro is running with a project open\n\
         2. Check that the panel HTTP server is running on port 3001\n\
         3. Verify the MCP extension is loaded in Premiere Pro",
        action, err
    ))
}

/// Build the full tool catalog, in its fixed advertised order.
pub fn default_registry(client: PanelClient, invoker: Arc<dyn HostScriptInvoker>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ProjectInfoTool::new(client.clone())));
    registry.register(Arc::new(ActiveSequenceTool::new(client.clone())));
    registry.register(Arc::new(ListSequencesTool::new(client.clone())));
    registry.register(Arc::new(SequenceDetailsTool::new(client.clone())));
    registry.register(Arc::new(TimelineStructureTool::new(client.clone())));
    registry.register(Arc::new(TimelineClipsTool::new(client.clone())));
    registry.register(Arc::new(ProjectMediaTool::new(client.clone())));
    registry.register(Arc::new(ProjectBinsTool::new(client.clone())));
    registry.register(Arc::new(PlayheadTool::new(client.clone())));
    registry.register(Arc::new(SelectionTool::new(client.clone())));
    registry.register(Arc::new(ExportPresetsTool::new(client.clone())));
    registry.register(Arc::new(RenderQueueTool::new(client.clone())));
    registry.register(Arc::new(TrimClipTool::new(invoker)));
    registry.register(Arc::new(CreateSequenceTool::new(client.clone())));
    registry.register(Arc::new(ExportProjectTool::new(client)));

    registry
}
