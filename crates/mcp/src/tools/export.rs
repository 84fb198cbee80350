// Export preset, render queue, and export kickoff tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_object, json_schema_string, panel_condition, panel_failure,
    Tool,
};
use anyhow::{Context, Result};
use montage_panel::types::{ExportPresets, ExportRequest, ExportStatus, RenderQueue};
use montage_panel::{PanelClient, PanelReply};

/// `get_export_presets`: available Adobe Media Encoder presets.
pub struct ExportPresetsTool {
    client: PanelClient,
}

impl ExportPresetsTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_export_presets(data: &ExportPresets) -> String {
    let presets = data
        .presets
        .iter()
        .map(|preset| {
            format!(
                "• **{}** ({})\n  📐 {}x{} @ {}fps\n  📊 Video: {} | Audio: {} @ {}",
                preset.preset_name,
                preset.format,
                preset.resolution.width,
                preset.resolution.height,
                preset.frame_rate,
                preset.bitrate,
                preset.audio_codec,
                preset.audio_bitrate,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("🎥 **Export Presets**\n\n{}", presets)
}

#[async_trait::async_trait]
impl Tool for ExportPresetsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_export_presets".to_string(),
            description: "Get available export presets and their settings".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.export_presets().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_export_presets(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get export presets", &e)),
        }
    }
}

/// `get_render_queue`: current Media Encoder queue with per-item status.
pub struct RenderQueueTool {
    client: PanelClient,
}

impl RenderQueueTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn status_glyph(status: &str) -> &'static str {
    match status {
        "queued" => "⏳",
        "rendering" => "🔄",
        "complete" => "✅",
        "error" => "❌",
        _ => "❓",
    }
}

fn render_render_queue(data: &RenderQueue) -> String {
    if data.queue_items.is_empty() {
        return "🎬 **Render Queue**\n\nNo items in render queue.".to_string();
    }

    let items = data
        .queue_items
        .iter()
        .map(|item| {
            format!(
                "{} **{}**\n  📁 {}\n  ⚙️ {} | Progress: {}%\n  ⏱️ ETA: {}",
                status_glyph(&item.status),
                item.sequence_name,
                item.output_path,
                item.preset,
                item.progress_percentage,
                item.estimated_time_remaining,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "🎬 **Render Queue ({} items)**\n\n{}",
        data.total_queue_items, items
    )
}

#[async_trait::async_trait]
impl Tool for RenderQueueTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_render_queue".to_string(),
            description: "Get current render queue status and items".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.render_queue().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_render_queue(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get render queue", &e)),
        }
    }
}

/// `export_project`: submit the active sequence for export.
pub struct ExportProjectTool {
    client: PanelClient,
}

impl ExportProjectTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_export_status(status: &ExportStatus) -> String {
    if status.is_queued() {
        let position = status
            .queue_position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let estimate = status
            .estimated_duration
            .as_deref()
            .unwrap_or("unknown")
            .to_string();
        format!(
            "🎬 **Export Queued Successfully**\n\n**Output Path:** {}\n**Preset:** {}\n**Sequence:** {}\n**Queue Position:** {}\n**Estimated Duration:** {}",
            status.output_path, status.preset_name, status.sequence_name, position, estimate
        )
    } else {
        format!(
            "✅ **Export Started Successfully**\n\n**Output Path:** {}\n**Preset:** {}\n**Sequence:** {}\n**Status:** {}",
            status.output_path, status.preset_name, status.sequence_name, status.status
        )
    }
}

#[async_trait::async_trait]
impl Tool for ExportProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "export_project".to_string(),
            description: "Export the current project or sequence".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "output_path": json_schema_string("Output file path"),
                    "preset_name": json_schema_string(
                        "Export preset name (default: H.264 High Quality)"
                    ),
                    "include_audio": json_schema_boolean(
                        "Include audio in export (default: true)"
                    ),
                }),
                vec!["output_path"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let request: ExportRequest = serde_json::from_value(arguments)
            .context("Invalid arguments for export_project")?;
        match self.client.export_project(&request).await {
            Ok(PanelReply::Payload(status)) => {
                Ok(CallToolResult::text(render_export_status(&status)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("export project", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_panel::types::RenderQueueItem;

    fn queue_item(status: &str) -> RenderQueueItem {
        RenderQueueItem {
            sequence_name: "Main Edit".to_string(),
            output_path: "/exports/main.mp4".to_string(),
            preset: "H.264 High Quality".to_string(),
            progress_percentage: 42.0,
            estimated_time_remaining: "00:03:12".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_catalog_descriptions() {
        let client = montage_panel::PanelClient::builder()
            .base_url("http://127.0.0.1:3001")
            .build()
            .unwrap();

        assert_eq!(
            RenderQueueTool::new(client.clone()).schema().description,
            "Get current render queue status and items"
        );
        assert_eq!(
            ExportProjectTool::new(client).schema().description,
            "Export the current project or sequence"
        );
    }

    #[test]
    fn test_status_glyphs() {
        assert_eq!(status_glyph("queued"), "⏳");
        assert_eq!(status_glyph("rendering"), "🔄");
        assert_eq!(status_glyph("complete"), "✅");
        assert_eq!(status_glyph("error"), "❌");
        assert_eq!(status_glyph("paused"), "❓");
    }

    #[test]
    fn test_empty_render_queue() {
        let rendered = render_render_queue(&RenderQueue::default());
        assert_eq!(rendered, "🎬 **Render Queue**\n\nNo items in render queue.");
    }

    #[test]
    fn test_render_queue_items() {
        let data = RenderQueue {
            total_queue_items: 2,
            queue_items: vec![queue_item("rendering"), queue_item("queued")],
        };
        let rendered = render_render_queue(&data);
        assert!(rendered.starts_with("🎬 **Render Queue (2 items)**"));
        assert!(rendered.contains("🔄 **Main Edit**"));
        assert!(rendered.contains("Progress: 42%"));
        assert!(rendered.contains("⏱️ ETA: 00:03:12"));
    }

    #[test]
    fn test_export_queued_rendering() {
        let status = ExportStatus {
            status: "queued".to_string(),
            output_path: "/exports/out.mp4".to_string(),
            preset_name: "H.264 High Quality".to_string(),
            sequence_name: "Main Edit".to_string(),
            queue_position: Some(3),
            estimated_duration: Some("00:05:00".to_string()),
        };
        let rendered = render_export_status(&status);
        assert!(rendered.starts_with("🎬 **Export Queued Successfully**"));
        assert!(rendered.contains("**Queue Position:** 3"));
        assert!(rendered.contains("**Estimated Duration:** 00:05:00"));
    }

    #[test]
    fn test_export_started_rendering() {
        let status = ExportStatus {
            status: "started".to_string(),
            output_path: "/exports/out.mp4".to_string(),
            preset_name: "ProRes 422".to_string(),
            sequence_name: "Main Edit".to_string(),
            queue_position: None,
            estimated_duration: None,
        };
        let rendered = render_export_status(&status);
        assert!(rendered.starts_with("✅ **Export Started Successfully**"));
        assert!(rendered.contains("**Status:** started"));
        assert!(!rendered.contains("Queue Position"));
    }
}
