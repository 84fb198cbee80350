// Sequence query and creation tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_number, json_schema_object, json_schema_string, panel_condition, panel_failure,
    Tool,
};
use anyhow::{Context, Result};
use montage_panel::types::{ActiveSequence, CreateSequenceRequest, CreatedSequence, SequenceDetails};
use montage_panel::{PanelClient, PanelReply};
use serde::Deserialize;

/// `get_active_sequence_info`: settings of the active sequence.
pub struct ActiveSequenceTool {
    client: PanelClient,
}

impl ActiveSequenceTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_active_sequence(data: &ActiveSequence) -> String {
    format!(
        "🎬 **Active Sequence Details**\n\n\
         **Name:** {}\n\
         **Duration:** {}\n\
         **Frame Rate:** {} fps\n\
         **Resolution:** {}x{}\n\
         **Audio Sample Rate:** {} Hz\n\
         **Timecode Start:** {}\n\
         **Playhead Position:** {}\n\
         **Video Tracks:** {}\n\
         **Audio Tracks:** {}",
        data.sequence_name,
        data.duration,
        data.frame_rate,
        data.resolution.width,
        data.resolution.height,
        data.audio_sample_rate,
        data.timecode_start,
        data.playhead_position,
        data.track_count.video_tracks,
        data.track_count.audio_tracks,
    )
}

#[async_trait::async_trait]
impl Tool for ActiveSequenceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_active_sequence_info".to_string(),
            description: "Get detailed information about the currently active sequence"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.active_sequence().await {
            Ok(PanelReply::Payload(data)) => {
                Ok(CallToolResult::text(render_active_sequence(&data)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get active sequence info", &e)),
        }
    }
}

/// `get_sequence_details`: tracks, effects and markers of one sequence.
pub struct SequenceDetailsTool {
    client: PanelClient,
}

impl SequenceDetailsTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SequenceDetailsArgs {
    sequence_name: String,
}

fn render_sequence_details(data: &SequenceDetails) -> String {
    let video_tracks = data
        .tracks
        .video_tracks
        .iter()
        .map(|track| {
            format!(
                "  • Track {}: {} ({} clips) {} {}",
                track.track_number,
                track.track_name,
                track.clip_count,
                if track.is_locked { "🔒" } else { "" },
                if track.is_visible { "👁️" } else { "🙈" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let audio_tracks = data
        .tracks
        .audio_tracks
        .iter()
        .map(|track| {
            format!(
                "  • Track {}: {} ({} clips) {} {} {}",
                track.track_number,
                track.track_name,
                track.clip_count,
                if track.is_locked { "🔒" } else { "" },
                if track.is_muted { "🔇" } else { "🔊" },
                if track.is_solo { "🎯" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎬 **Sequence Details: {}**\n\n\
         **Settings:**\n\
         • Resolution: {}x{}\n\
         • Frame Rate: {} fps\n\
         • Audio: {} Hz\n\n\
         **Video Tracks:**\n{}\n\n\
         **Audio Tracks:**\n{}\n\n\
         **Applied Effects:** {}\n\
         **Markers:** {}",
        data.sequence_name,
        data.settings.resolution.width,
        data.settings.resolution.height,
        data.settings.frame_rate,
        data.settings.audio_sample_rate,
        video_tracks,
        audio_tracks,
        data.effects_applied.join(", "),
        data.markers.len(),
    )
}

#[async_trait::async_trait]
impl Tool for SequenceDetailsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_sequence_details".to_string(),
            description:
                "Get detailed information about a specific sequence including tracks, effects, and markers"
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "sequence_name": json_schema_string("Name of the sequence to get details for")
                }),
                vec!["sequence_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SequenceDetailsArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for get_sequence_details")?;

        match self.client.sequence_details(&args.sequence_name).await {
            Ok(PanelReply::Payload(data)) => {
                Ok(CallToolResult::text(render_sequence_details(&data)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get sequence details", &e)),
        }
    }
}

/// `create_sequence`: create a new sequence with the given settings.
pub struct CreateSequenceTool {
    client: PanelClient,
}

impl CreateSequenceTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_created_sequence(data: &CreatedSequence) -> String {
    format!(
        "✅ **Sequence Created Successfully**\n\n\
         **Name:** {}\n\
         **Resolution:** {}x{}\n\
         **Frame Rate:** {} fps\n\
         **Created:** {}",
        data.sequence_name,
        data.resolution.width,
        data.resolution.height,
        data.frame_rate,
        data.created_timestamp,
    )
}

#[async_trait::async_trait]
impl Tool for CreateSequenceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_sequence".to_string(),
            description: "Create a new sequence in Premiere Pro".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "name": json_schema_string("Name of the new sequence"),
                    "width": json_schema_number("Width in pixels (default: 1920)"),
                    "height": json_schema_number("Height in pixels (default: 1080)"),
                    "framerate": json_schema_number("Frame rate (default: 23.976)"),
                }),
                vec!["name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        // Omitted fields pick up the request defaults during deserialization
        let req: CreateSequenceRequest =
            serde_json::from_value(arguments).context("Invalid arguments for create_sequence")?;

        match self.client.create_sequence(&req).await {
            Ok(PanelReply::Payload(data)) => {
                Ok(CallToolResult::text(render_created_sequence(&data)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("create sequence", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_panel::types::{SequenceSettings, SequenceTracks, SequenceVideoTrack};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_sequence_details_track_glyphs() {
        let data = SequenceDetails {
            sequence_name: "Main".to_string(),
            settings: SequenceSettings {
                resolution: montage_panel::types::Resolution {
                    width: 3840,
                    height: 2160,
                },
                frame_rate: 25.0,
                audio_sample_rate: 48000,
            },
            tracks: SequenceTracks {
                video_tracks: vec![SequenceVideoTrack {
                    track_number: 1,
                    track_name: "V1".to_string(),
                    clip_count: 3,
                    is_locked: true,
                    is_visible: false,
                }],
                audio_tracks: vec![],
            },
            effects_applied: vec!["Lumetri Color".to_string(), "Warp Stabilizer".to_string()],
            markers: vec![serde_json::json!({}), serde_json::json!({})],
        };

        let rendered = render_sequence_details(&data);
        assert!(rendered.contains("• Resolution: 3840x2160"));
        assert!(rendered.contains("Track 1: V1 (3 clips) 🔒 🙈"));
        assert!(rendered.contains("**Applied Effects:** Lumetri Color, Warp Stabilizer"));
        assert!(rendered.contains("**Markers:** 2"));
    }

    #[tokio::test]
    async fn test_create_sequence_applies_defaults() {
        let server = MockServer::start().await;

        // The POST body must carry the documented defaults even though the
        // caller provided only a name.
        Mock::given(method("POST"))
            .and(path("/api/create-sequence"))
            .and(body_json(serde_json::json!({
                "name": "Test",
                "width": 1920,
                "height": 1080,
                "framerate": 23.976
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sequence_name": "Test",
                "resolution": {"width": 1920, "height": 1080},
                "frame_rate": 23.976,
                "created_timestamp": "2024-06-01T12:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = PanelClient::builder().base_url(server.uri()).build().unwrap();
        let tool = CreateSequenceTool::new(client);
        let result = tool
            .execute(serde_json::json!({"name": "Test"}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        let text = result.joined_text();
        assert!(text.contains("Sequence Created Successfully"));
        assert!(text.contains("1920x1080"));
        assert!(text.contains("23.976"));
    }

    #[tokio::test]
    async fn test_create_sequence_requires_name() {
        let client = PanelClient::builder()
            .base_url("http://127.0.0.1:3001")
            .build()
            .unwrap();
        let tool = CreateSequenceTool::new(client);

        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        assert!(err.to_string().contains("create_sequence"));
    }
}
