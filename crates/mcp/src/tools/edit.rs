// Editing tools backed by the host-scripting bridge

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_enum, json_schema_number, json_schema_object, json_schema_string, Tool,
};
use anyhow::{Context, Result};
use montage_relay::{HostScriptInvoker, ScriptOutcome, TrimRequest, TRIM_FUNCTION};
use std::sync::Arc;

/// `trim_clip_by_frames`: adjust a clip edit point through the host bridge.
///
/// Unlike the read-only tools this one does not talk to the panel HTTP
/// server; the trim runs inside the host application via the script invoker.
pub struct TrimClipTool {
    invoker: Arc<dyn HostScriptInvoker>,
}

impl TrimClipTool {
    pub fn new(invoker: Arc<dyn HostScriptInvoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait::async_trait]
impl Tool for TrimClipTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "trim_clip_by_frames".to_string(),
            description:
                "Trim or extend the in/out point of a video or audio clip by a number of frames."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "sequenceId": json_schema_number("Index of the sequence (0-based)"),
                    "clipId": json_schema_string("ID of the clip to trim"),
                    "framesDelta": json_schema_number(
                        "Number of frames to trim (positive or negative)"
                    ),
                    "direction": json_schema_enum(
                        &["in", "out"],
                        "Which edit point to trim ('in' or 'out')"
                    ),
                    "trackType": json_schema_enum(
                        &["video", "audio"],
                        "Track type ('video' or 'audio')"
                    ),
                }),
                vec!["sequenceId", "clipId", "framesDelta", "direction", "trackType"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let request: TrimRequest = serde_json::from_value(arguments)
            .context("Invalid arguments for trim_clip_by_frames")?;

        let value = self
            .invoker
            .invoke(TRIM_FUNCTION, &request.to_positional())
            .await?;
        let outcome: ScriptOutcome =
            serde_json::from_value(value).unwrap_or_else(|_| ScriptOutcome::failed("Unknown error"));

        if outcome.success {
            Ok(CallToolResult::text("✅ Clip trimmed successfully."))
        } else {
            Ok(CallToolResult::error(format!(
                "❌ Failed to trim clip: {}",
                outcome.error.as_deref().unwrap_or("Unknown error")
            )))
        }
    }
}
