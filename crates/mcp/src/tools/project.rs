// Project-level query tools: stats, sequence listing, bin structure

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, panel_condition, panel_failure, Tool};
use anyhow::Result;
use montage_panel::types::{ProjectBins, ProjectStats, SequenceList};
use montage_panel::{PanelClient, PanelReply};

/// `get_project_info`: basic statistics of the open project.
pub struct ProjectInfoTool {
    client: PanelClient,
}

impl ProjectInfoTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_project_info(stats: &ProjectStats) -> String {
    format!(
        "**Current Premiere Pro Project Information:**\n\n\
         📽️ **Project**: {}\n\
         🎬 **Sequences**: {}\n\
         🎥 **Clips**: {}\n\
         📁 **Bins**: {}\n\
         🛤️ **Tracks**: {}\n\
         ⏱️ **Duration**: {}\n\n\
         *Retrieved from active Premiere Pro instance*",
        stats.project_name.as_deref().unwrap_or("Unknown Project"),
        stats.sequences,
        stats.clips,
        stats.bins,
        stats.tracks,
        stats.duration.as_deref().unwrap_or("Unknown"),
    )
}

#[async_trait::async_trait]
impl Tool for ProjectInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_project_info".to_string(),
            description: "Get basic information about the current Premiere Pro project"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.project_stats().await {
            Ok(PanelReply::Payload(stats)) => Ok(CallToolResult::text(render_project_info(&stats))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get project info", &e)),
        }
    }
}

/// `list_all_sequences`: every sequence in the project, one line each.
pub struct ListSequencesTool {
    client: PanelClient,
}

impl ListSequencesTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_sequence_list(data: &SequenceList) -> String {
    let lines = data
        .sequences
        .iter()
        .map(|seq| {
            let active = if seq.is_active { " ✅ ACTIVE" } else { "" };
            format!(
                "• **{}** ({}) - {} @ {}fps - {} clips{}",
                seq.name, seq.duration, seq.resolution, seq.frame_rate, seq.clip_count, active
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎬 **All Sequences ({})**\n\n{}\n\n**Active Sequence:** {}",
        data.total_sequences, lines, data.active_sequence
    )
}

#[async_trait::async_trait]
impl Tool for ListSequencesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_all_sequences".to_string(),
            description: "List all sequences in the current project with basic info".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.sequences().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_sequence_list(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("list sequences", &e)),
        }
    }
}

/// `get_project_bins`: bin hierarchy of the project browser.
pub struct ProjectBinsTool {
    client: PanelClient,
}

impl ProjectBinsTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_project_bins(data: &ProjectBins) -> String {
    let lines = data
        .bins
        .iter()
        .map(|bin| {
            let indent = if bin.parent_bin.is_some() { "  " } else { "" };
            let sub_bins = if bin.sub_bins.is_empty() {
                String::new()
            } else {
                format!(" ({} sub-bins)", bin.sub_bins.len())
            };
            let label = bin
                .color_label
                .as_deref()
                .map(|l| format!(" 🏷️ {}", l))
                .unwrap_or_default();
            format!(
                "{}📁 **{}** - {} items{}{}",
                indent, bin.bin_name, bin.media_count, sub_bins, label
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("📁 **Project Bins ({} total)**\n\n{}", data.total_bins, lines)
}

#[async_trait::async_trait]
impl Tool for ProjectBinsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_project_bins".to_string(),
            description: "Get project bin structure and organization".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.project_bins().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_project_bins(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get project bins", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_panel::types::{Bin, SequenceSummary};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_project_info_defaults_missing_fields() {
        let rendered = render_project_info(&ProjectStats::default());
        assert!(rendered.contains("**Project**: Unknown Project"));
        assert!(rendered.contains("**Duration**: Unknown"));
        assert!(rendered.contains("**Clips**: 0"));
    }

    #[test]
    fn test_sequence_list_marks_active() {
        let data = SequenceList {
            sequences: vec![
                SequenceSummary {
                    name: "Rough".to_string(),
                    duration: "00:01:00".to_string(),
                    resolution: "1920x1080".to_string(),
                    frame_rate: 23.976,
                    clip_count: 4,
                    is_active: false,
                },
                SequenceSummary {
                    name: "Final".to_string(),
                    duration: "00:02:00".to_string(),
                    resolution: "1920x1080".to_string(),
                    frame_rate: 23.976,
                    clip_count: 9,
                    is_active: true,
                },
            ],
            total_sequences: 2,
            active_sequence: "Final".to_string(),
        };

        let rendered = render_sequence_list(&data);
        assert!(rendered.contains("**All Sequences (2)**"));
        assert!(rendered.contains("• **Final** (00:02:00) - 1920x1080 @ 23.976fps - 9 clips ✅ ACTIVE"));
        assert!(!rendered.contains("Rough** (00:01:00) - 1920x1080 @ 23.976fps - 4 clips ✅"));
    }

    #[test]
    fn test_bins_render_nesting_and_labels() {
        let data = ProjectBins {
            total_bins: 2,
            bins: vec![
                Bin {
                    bin_name: "Footage".to_string(),
                    media_count: 12,
                    sub_bins: vec!["B-Roll".to_string()],
                    parent_bin: None,
                    color_label: None,
                },
                Bin {
                    bin_name: "B-Roll".to_string(),
                    media_count: 5,
                    sub_bins: vec![],
                    parent_bin: Some("Footage".to_string()),
                    color_label: Some("Blue".to_string()),
                },
            ],
        };

        let rendered = render_project_bins(&data);
        assert!(rendered.contains("📁 **Footage** - 12 items (1 sub-bins)"));
        assert!(rendered.contains("  📁 **B-Roll** - 5 items 🏷️ Blue"));
    }

    #[tokio::test]
    async fn test_execute_renders_condition_without_error_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/project-stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "No project is currently open"
            })))
            .mount(&server)
            .await;

        let client = PanelClient::builder().base_url(server.uri()).build().unwrap();
        let tool = ProjectInfoTool::new(client);
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        assert!(result.is_error.is_none());
        assert!(result.joined_text().contains("No project is currently open"));
    }

    #[tokio::test]
    async fn test_execute_flags_server_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/project-stats"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PanelClient::builder().base_url(server.uri()).build().unwrap();
        let tool = ProjectInfoTool::new(client);
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result.joined_text().contains("500"));
        assert!(result.joined_text().contains("Troubleshooting"));
    }
}
