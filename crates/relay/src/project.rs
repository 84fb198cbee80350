//! Minimal project document model for the in-process script host.
//!
//! Mirrors the slice of the Premiere Pro object graph the scripting
//! operations touch: sequences indexed by position, each with video and audio
//! tracks holding clips with in/out points in seconds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub sequences: Vec<Sequence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequence {
    pub name: String,
    /// Frames per second. Zero or absent means unknown; consumers fall back
    /// to a conventional timebase.
    pub timebase: f64,
    pub video_tracks: Vec<Track>,
    pub audio_tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub name: String,
    pub clips: Vec<Clip>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clip {
    /// Node id of the clip on the timeline.
    pub node_id: String,
    /// Node id of the backing project item, when known.
    pub source_item_id: Option<String>,
    pub name: String,
    pub in_point_seconds: f64,
    pub out_point_seconds: f64,
}

impl Clip {
    /// A clip is addressed either by its own node id or by the id of its
    /// backing project item.
    pub fn matches_id(&self, id: &str) -> bool {
        self.node_id == id || self.source_item_id.as_deref() == Some(id)
    }
}
