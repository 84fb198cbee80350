//! Payload types for the control-plane API.
//!
//! Every document the panel server returns is transient and read-once; the
//! structs here are deliberately lenient (`#[serde(default)]` throughout) so
//! a missing field degrades to a placeholder during formatting instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Pixel dimensions, shared by several payloads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Response of `GET /api/project-stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectStats {
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
    pub sequences: u64,
    pub clips: u64,
    pub bins: u64,
    pub tracks: u64,
    pub duration: Option<String>,
}

/// Response of `GET /api/active-sequence`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveSequence {
    pub sequence_name: String,
    pub duration: String,
    pub frame_rate: f64,
    pub resolution: Resolution,
    pub audio_sample_rate: u32,
    pub timecode_start: String,
    pub playhead_position: String,
    pub track_count: TrackCount,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackCount {
    pub video_tracks: u32,
    pub audio_tracks: u32,
}

/// Response of `GET /api/sequences`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceList {
    pub sequences: Vec<SequenceSummary>,
    pub total_sequences: u64,
    pub active_sequence: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSummary {
    pub name: String,
    pub duration: String,
    pub resolution: String,
    pub frame_rate: f64,
    pub clip_count: u64,
    pub is_active: bool,
}

/// Response of `GET /api/sequence-details?name=<enc>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceDetails {
    pub sequence_name: String,
    pub settings: SequenceSettings,
    pub tracks: SequenceTracks,
    pub effects_applied: Vec<String>,
    pub markers: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSettings {
    pub resolution: Resolution,
    pub frame_rate: f64,
    pub audio_sample_rate: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceTracks {
    pub video_tracks: Vec<SequenceVideoTrack>,
    pub audio_tracks: Vec<SequenceAudioTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceVideoTrack {
    pub track_number: u32,
    pub track_name: String,
    pub clip_count: u64,
    pub is_locked: bool,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceAudioTrack {
    pub track_number: u32,
    pub track_name: String,
    pub clip_count: u64,
    pub is_locked: bool,
    pub is_muted: bool,
    pub is_solo: bool,
}

/// Response of `GET /api/timeline-structure`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStructure {
    pub sequence_name: String,
    pub video_tracks: Vec<TimelineVideoTrack>,
    pub audio_tracks: Vec<TimelineAudioTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineVideoTrack {
    pub track_index: u32,
    pub track_name: String,
    pub is_locked: bool,
    pub is_visible: bool,
    pub blend_mode: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineAudioTrack {
    pub track_index: u32,
    pub track_name: String,
    pub is_locked: bool,
    pub is_muted: bool,
    pub is_solo: bool,
    pub volume: f64,
    pub pan: f64,
}

/// Response of `GET /api/timeline-clips`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineClips {
    pub total_clips: u64,
    pub clips: Vec<TimelineClip>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineClip {
    pub clip_name: String,
    pub track_type: String,
    pub track_number: u32,
    pub timeline_in: String,
    pub timeline_out: String,
    pub duration: String,
    pub source_file_path: String,
    pub speed: f64,
    pub effects: Vec<String>,
}

/// Response of `GET /api/project-media`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMedia {
    pub total_media_count: u64,
    pub media_items: Vec<MediaItem>,
    pub total_duration: String,
    pub offline_media_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    pub file_name: String,
    pub duration: String,
    pub resolution: Resolution,
    pub frame_rate: f64,
    pub file_size_mb: f64,
    pub audio_channels: u32,
    pub audio_sample_rate: u32,
    pub bin_location: String,
    pub usage_count: u64,
    pub is_offline: bool,
}

/// Response of `GET /api/project-bins`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectBins {
    pub total_bins: u64,
    pub bins: Vec<Bin>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bin {
    pub bin_name: String,
    pub media_count: u64,
    pub sub_bins: Vec<String>,
    pub parent_bin: Option<String>,
    pub color_label: Option<String>,
}

/// Response of `GET /api/playhead`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Playhead {
    pub sequence_name: String,
    pub timecode: String,
    pub frame_number: u64,
    pub percentage_complete: f64,
    pub is_playing: bool,
    pub playback_speed: f64,
}

/// Response of `GET /api/selection`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub selection_type: String,
    pub selected_clips: Vec<SelectedClip>,
    pub selection_in: String,
    pub selection_out: String,
    pub selection_duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectedClip {
    pub clip_name: String,
    pub track_type: String,
    pub track_number: u32,
}

/// Response of `GET /api/export-presets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPresets {
    pub presets: Vec<ExportPreset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPreset {
    pub preset_name: String,
    pub format: String,
    pub resolution: Resolution,
    pub frame_rate: f64,
    pub bitrate: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

/// Response of `GET /api/render-queue`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderQueue {
    pub total_queue_items: u64,
    pub queue_items: Vec<RenderQueueItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderQueueItem {
    pub sequence_name: String,
    pub output_path: String,
    pub preset: String,
    pub progress_percentage: f64,
    pub estimated_time_remaining: String,
    pub status: String,
}

/// Request body for `POST /api/create-sequence`.
///
/// The defaults match what the panel would pick for a fresh sequence and are
/// serialized explicitly so the panel never has to guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSequenceRequest {
    pub name: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_framerate")]
    pub framerate: f64,
}

impl CreateSequenceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: default_width(),
            height: default_height(),
            framerate: default_framerate(),
        }
    }
}

pub(crate) fn default_width() -> u32 {
    1920
}

pub(crate) fn default_height() -> u32 {
    1080
}

pub(crate) fn default_framerate() -> f64 {
    23.976
}

/// Response of `POST /api/create-sequence`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedSequence {
    pub sequence_name: String,
    pub resolution: Resolution,
    pub frame_rate: f64,
    pub created_timestamp: String,
}

/// Request body for `POST /api/export-project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub output_path: String,
    #[serde(default = "default_preset")]
    pub preset_name: String,
    #[serde(default = "default_include_audio")]
    pub include_audio: bool,
}

impl ExportRequest {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            preset_name: default_preset(),
            include_audio: default_include_audio(),
        }
    }
}

pub(crate) fn default_preset() -> String {
    "H.264 High Quality".to_string()
}

pub(crate) fn default_include_audio() -> bool {
    true
}

/// Response of `POST /api/export-project`. Two success shapes, keyed on
/// `status`: `"queued"` carries a queue position and estimate, anything else
/// means the export started immediately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportStatus {
    pub status: String,
    pub output_path: String,
    pub preset_name: String,
    pub sequence_name: String,
    pub queue_position: Option<u64>,
    pub estimated_duration: Option<String>,
}

impl ExportStatus {
    /// Whether the export was queued rather than started immediately.
    pub fn is_queued(&self) -> bool {
        self.status == "queued"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sequence_defaults() {
        let req: CreateSequenceRequest = serde_json::from_str(r#"{"name":"Test"}"#).unwrap();
        assert_eq!(req.width, 1920);
        assert_eq!(req.height, 1080);
        assert_eq!(req.framerate, 23.976);
    }

    #[test]
    fn test_export_request_defaults() {
        let req: ExportRequest = serde_json::from_str(r#"{"output_path":"/tmp/out.mp4"}"#).unwrap();
        assert_eq!(req.preset_name, "H.264 High Quality");
        assert!(req.include_audio);
    }

    #[test]
    fn test_project_stats_lenient_parse() {
        // Absent fields default instead of failing
        let stats: ProjectStats = serde_json::from_str("{}").unwrap();
        assert!(stats.project_name.is_none());
        assert_eq!(stats.sequences, 0);
    }

    #[test]
    fn test_export_status_queued() {
        let status: ExportStatus = serde_json::from_str(
            r#"{"status":"queued","output_path":"/tmp/out.mp4","queue_position":2}"#,
        )
        .unwrap();
        assert!(status.is_queued());
        assert_eq!(status.queue_position, Some(2));
    }
}
