// Project media browser tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, panel_condition, panel_failure, Tool};
use anyhow::Result;
use montage_panel::types::ProjectMedia;
use montage_panel::{PanelClient, PanelReply};

/// Cap on rendered media items.
const MAX_MEDIA_SHOWN: usize = 15;

/// `get_project_media`: media items in the project browser, capped at 15.
pub struct ProjectMediaTool {
    client: PanelClient,
}

impl ProjectMediaTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_project_media(data: &ProjectMedia) -> String {
    let items = data
        .media_items
        .iter()
        .take(MAX_MEDIA_SHOWN)
        .map(|media| {
            format!(
                "• **{}** ({})\n  📐 {}x{} @ {}fps\n  💾 {}MB | 🎵 {}ch @ {}Hz\n  📂 {} | Used: {}x {}",
                media.file_name,
                media.duration,
                media.resolution.width,
                media.resolution.height,
                media.frame_rate,
                media.file_size_mb,
                media.audio_channels,
                media.audio_sample_rate,
                media.bin_location,
                media.usage_count,
                if media.is_offline { "❌ OFFLINE" } else { "✅" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let truncated = if data.total_media_count as usize > MAX_MEDIA_SHOWN {
        format!(", showing first {}", MAX_MEDIA_SHOWN)
    } else {
        String::new()
    };

    format!(
        "📁 **Project Media ({} items{})**\n\n{}\n\n**Total Duration:** {}\n**Offline Media:** {} items",
        data.total_media_count, truncated, items, data.total_duration, data.offline_media_count
    )
}

#[async_trait::async_trait]
impl Tool for ProjectMediaTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_project_media".to_string(),
            description: "Get all media items in the project browser with file information"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.project_media().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_project_media(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get project media", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_panel::types::{MediaItem, Resolution};

    fn media_payload(count: usize) -> ProjectMedia {
        ProjectMedia {
            total_media_count: count as u64,
            media_items: (0..count)
                .map(|i| MediaItem {
                    file_name: format!("take_{}.mov", i),
                    duration: "00:00:30:00".to_string(),
                    resolution: Resolution {
                        width: 1920,
                        height: 1080,
                    },
                    frame_rate: 23.976,
                    file_size_mb: 512.0,
                    audio_channels: 2,
                    audio_sample_rate: 48000,
                    bin_location: "Footage".to_string(),
                    usage_count: 1,
                    is_offline: i % 2 == 1,
                })
                .collect(),
            total_duration: "00:10:00:00".to_string(),
            offline_media_count: count as u64 / 2,
        }
    }

    #[test]
    fn test_media_truncated_at_fifteen() {
        let rendered = render_project_media(&media_payload(18));
        assert!(rendered.contains("(18 items, showing first 15)"));
        assert_eq!(rendered.matches("• **take_").count(), 15);
    }

    #[test]
    fn test_small_media_list_has_no_indicator() {
        let rendered = render_project_media(&media_payload(6));
        assert!(rendered.contains("(6 items)"));
        assert!(!rendered.contains("showing first"));
    }

    #[test]
    fn test_offline_marker() {
        let rendered = render_project_media(&media_payload(2));
        assert!(rendered.contains("Used: 1x ✅"));
        assert!(rendered.contains("Used: 1x ❌ OFFLINE"));
    }
}
