// Timeline query tools: track structure, clips, playhead, selection

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, panel_condition, panel_failure, Tool};
use anyhow::Result;
use montage_panel::types::{Playhead, Selection, TimelineClips, TimelineStructure};
use montage_panel::{PanelClient, PanelReply};

/// Cap on rendered timeline clips.
const MAX_CLIPS_SHOWN: usize = 20;

/// Final path component, accepting either separator since the panel reports
/// paths from whichever platform Premiere runs on.
pub(crate) fn file_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// `get_timeline_structure`: track layout of the active sequence.
pub struct TimelineStructureTool {
    client: PanelClient,
}

impl TimelineStructureTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_timeline_structure(data: &TimelineStructure) -> String {
    let video_tracks = data
        .video_tracks
        .iter()
        .map(|track| {
            format!(
                "  • V{}: {} {} {} ({})",
                track.track_index,
                track.track_name,
                if track.is_locked { "🔒" } else { "" },
                if track.is_visible { "👁️" } else { "🙈" },
                track.blend_mode,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let audio_tracks = data
        .audio_tracks
        .iter()
        .map(|track| {
            format!(
                "  • A{}: {} {} {} {} (Vol: {}dB, Pan: {})",
                track.track_index,
                track.track_name,
                if track.is_locked { "🔒" } else { "" },
                if track.is_muted { "🔇" } else { "🔊" },
                if track.is_solo { "🎯" } else { "" },
                track.volume,
                track.pan,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎬 **Timeline Structure: {}**\n\n**Video Tracks:**\n{}\n\n**Audio Tracks:**\n{}",
        data.sequence_name, video_tracks, audio_tracks
    )
}

#[async_trait::async_trait]
impl Tool for TimelineStructureTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_timeline_structure".to_string(),
            description: "Get the track structure of the active sequence".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.timeline_structure().await {
            Ok(PanelReply::Payload(data)) => {
                Ok(CallToolResult::text(render_timeline_structure(&data)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get timeline structure", &e)),
        }
    }
}

/// `get_timeline_clips`: clips of the active sequence, capped at 20.
pub struct TimelineClipsTool {
    client: PanelClient,
}

impl TimelineClipsTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_timeline_clips(data: &TimelineClips) -> String {
    let clips = data
        .clips
        .iter()
        .take(MAX_CLIPS_SHOWN)
        .map(|clip| {
            let effects = if clip.effects.is_empty() {
                String::new()
            } else {
                format!(" | Effects: {}", clip.effects.join(", "))
            };
            format!(
                "• **{}** ({}{})\n  📍 {} → {} ({})\n  📁 {}\n  ⚡ {}%{}",
                clip.clip_name,
                clip.track_type,
                clip.track_number,
                clip.timeline_in,
                clip.timeline_out,
                clip.duration,
                file_basename(&clip.source_file_path),
                clip.speed,
                effects,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let truncated = if data.total_clips as usize > MAX_CLIPS_SHOWN {
        format!(", showing first {}", MAX_CLIPS_SHOWN)
    } else {
        String::new()
    };

    format!(
        "🎬 **Timeline Clips ({} total{})**\n\n{}",
        data.total_clips, truncated, clips
    )
}

#[async_trait::async_trait]
impl Tool for TimelineClipsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_timeline_clips".to_string(),
            description: "Get all clips in the active sequence with detailed information"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.timeline_clips().await {
            Ok(PanelReply::Payload(data)) => {
                Ok(CallToolResult::text(render_timeline_clips(&data)))
            }
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get timeline clips", &e)),
        }
    }
}

/// `get_playhead_info`: position and playback state.
pub struct PlayheadTool {
    client: PanelClient,
}

impl PlayheadTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_playhead(data: &Playhead) -> String {
    format!(
        "⏱️ **Playhead Info**\n\n\
         **Sequence:** {}\n\
         **Timecode:** {}\n\
         **Frame:** {}\n\
         **Progress:** {}%\n\
         **Status:** {}\n\
         **Speed:** {}x",
        data.sequence_name,
        data.timecode,
        data.frame_number,
        data.percentage_complete,
        if data.is_playing {
            "▶️ Playing"
        } else {
            "⏸️ Paused"
        },
        data.playback_speed,
    )
}

#[async_trait::async_trait]
impl Tool for PlayheadTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_playhead_info".to_string(),
            description: "Get current playhead position and playback state".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.playhead().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_playhead(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get playhead info", &e)),
        }
    }
}

/// `get_selection_info`: currently selected clips or time range.
pub struct SelectionTool {
    client: PanelClient,
}

impl SelectionTool {
    pub fn new(client: PanelClient) -> Self {
        Self { client }
    }
}

fn render_selection(data: &Selection) -> String {
    if data.selection_type == "none" {
        return "🎯 **Selection Info**\n\nNo clips or time range currently selected.".to_string();
    }

    let clips = data
        .selected_clips
        .iter()
        .map(|clip| {
            format!(
                "• **{}** ({}{})",
                clip.clip_name, clip.track_type, clip.track_number
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎯 **Selection Info**\n\n\
         **Type:** {}\n\
         **Selected Clips:**\n{}\n\n\
         **Time Range:** {} → {}\n\
         **Duration:** {}",
        data.selection_type, clips, data.selection_in, data.selection_out, data.selection_duration
    )
}

#[async_trait::async_trait]
impl Tool for SelectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_selection_info".to_string(),
            description: "Get information about currently selected clips or time range"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.selection().await {
            Ok(PanelReply::Payload(data)) => Ok(CallToolResult::text(render_selection(&data))),
            Ok(PanelReply::Condition(msg)) => Ok(panel_condition(&msg)),
            Err(e) => Ok(panel_failure("get selection info", &e)),
        }
    }
}
