//! The clip-trim editing procedure.
//!
//! Moves the in-point or out-point of one clip by a frame count, locating the
//! clip by id across every track of the requested type in the requested
//! sequence. Frames convert to seconds through the sequence timebase.

use crate::invoker::{InvokeError, ScriptOutcome};
use crate::project::Project;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Host-script function name for the trim procedure.
pub const TRIM_FUNCTION: &str = "trimClipByFrames";

/// Timebase assumed when a sequence does not report one.
pub const FALLBACK_TIMEBASE: f64 = 24.0;

/// Which edit point to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// Which track collection to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
}

/// Arguments of the trim procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimRequest {
    /// Index of the sequence (0-based).
    #[serde(rename = "sequenceId")]
    pub sequence_id: u32,
    /// Id of the clip to trim.
    #[serde(rename = "clipId")]
    pub clip_id: String,
    /// Number of frames to move the edit point, positive or negative.
    #[serde(rename = "framesDelta")]
    pub frames_delta: i64,
    pub direction: Direction,
    #[serde(rename = "trackType")]
    pub track_type: TrackType,
}

impl TrimRequest {
    /// Reconstruct a request from the positional argument list the relay
    /// forwards: `[sequenceId, clipId, framesDelta, direction, trackType]`.
    pub fn from_positional(args: &[Value]) -> Result<Self, InvokeError> {
        if args.len() != 5 {
            return Err(InvokeError::Args(format!(
                "{} takes 5 arguments, got {}",
                TRIM_FUNCTION,
                args.len()
            )));
        }

        let sequence_id = args[0]
            .as_u64()
            .and_then(|id| u32::try_from(id).ok())
            .ok_or_else(|| InvokeError::Args("sequenceId must be a non-negative integer".into()))?;
        let clip_id = args[1]
            .as_str()
            .ok_or_else(|| InvokeError::Args("clipId must be a string".into()))?
            .to_string();
        let frames_delta = args[2]
            .as_i64()
            .ok_or_else(|| InvokeError::Args("framesDelta must be an integer".into()))?;
        let direction: Direction = serde_json::from_value(args[3].clone())
            .map_err(|_| InvokeError::Args("direction must be \"in\" or \"out\"".into()))?;
        let track_type: TrackType = serde_json::from_value(args[4].clone())
            .map_err(|_| InvokeError::Args("trackType must be \"video\" or \"audio\"".into()))?;

        Ok(Self {
            sequence_id,
            clip_id,
            frames_delta,
            direction,
            track_type,
        })
    }

    /// The positional argument list for forwarding to a host bridge.
    pub fn to_positional(&self) -> Vec<Value> {
        vec![
            Value::from(self.sequence_id),
            Value::from(self.clip_id.clone()),
            Value::from(self.frames_delta),
            serde_json::to_value(self.direction).unwrap_or(Value::Null),
            serde_json::to_value(self.track_type).unwrap_or(Value::Null),
        ]
    }
}

/// Apply a trim to the project document.
///
/// Missing sequence and missing clip are reported in the outcome, not raised.
pub fn trim_clip_by_frames(project: &mut Project, req: &TrimRequest) -> ScriptOutcome {
    let Some(sequence) = project.sequences.get_mut(req.sequence_id as usize) else {
        return ScriptOutcome::failed("Sequence not found");
    };

    let timebase = if sequence.timebase > 0.0 {
        sequence.timebase
    } else {
        FALLBACK_TIMEBASE
    };
    let seconds_delta = req.frames_delta as f64 / timebase;

    let tracks = match req.track_type {
        TrackType::Video => &mut sequence.video_tracks,
        TrackType::Audio => &mut sequence.audio_tracks,
    };

    for track in tracks {
        for clip in &mut track.clips {
            if clip.matches_id(&req.clip_id) {
                match req.direction {
                    Direction::In => clip.in_point_seconds += seconds_delta,
                    Direction::Out => clip.out_point_seconds += seconds_delta,
                }
                return ScriptOutcome::ok();
            }
        }
    }

    ScriptOutcome::failed("Clip not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Clip, Sequence, Track};

    fn test_project(timebase: f64) -> Project {
        Project {
            sequences: vec![Sequence {
                name: "Main".to_string(),
                timebase,
                video_tracks: vec![Track {
                    name: "V1".to_string(),
                    clips: vec![Clip {
                        node_id: "clip-1".to_string(),
                        source_item_id: Some("item-9".to_string()),
                        name: "Interview".to_string(),
                        in_point_seconds: 2.0,
                        out_point_seconds: 10.0,
                    }],
                }],
                audio_tracks: vec![Track {
                    name: "A1".to_string(),
                    clips: vec![Clip {
                        node_id: "clip-2".to_string(),
                        source_item_id: None,
                        name: "VO".to_string(),
                        in_point_seconds: 0.0,
                        out_point_seconds: 8.0,
                    }],
                }],
            }],
        }
    }

    fn request(clip_id: &str, frames_delta: i64, direction: Direction, track_type: TrackType) -> TrimRequest {
        TrimRequest {
            sequence_id: 0,
            clip_id: clip_id.to_string(),
            frames_delta,
            direction,
            track_type,
        }
    }

    #[test]
    fn test_out_point_moves_one_second_at_matching_timebase() {
        let mut project = test_project(24.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("clip-1", 24, Direction::Out, TrackType::Video),
        );
        assert!(outcome.success);
        let clip = &project.sequences[0].video_tracks[0].clips[0];
        assert!((clip.out_point_seconds - 11.0).abs() < 1e-9);
        assert_eq!(clip.in_point_seconds, 2.0);
    }

    #[test]
    fn test_in_point_moves_backwards_on_negative_delta() {
        let mut project = test_project(24.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("clip-1", -12, Direction::In, TrackType::Video),
        );
        assert!(outcome.success);
        let clip = &project.sequences[0].video_tracks[0].clips[0];
        assert!((clip.in_point_seconds - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_timebase_fallback_when_unset() {
        let mut project = test_project(0.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("clip-1", 24, Direction::Out, TrackType::Video),
        );
        assert!(outcome.success);
        let clip = &project.sequences[0].video_tracks[0].clips[0];
        assert!((clip.out_point_seconds - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_found_by_source_item_id() {
        let mut project = test_project(24.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("item-9", 24, Direction::Out, TrackType::Video),
        );
        assert!(outcome.success);
    }

    #[test]
    fn test_audio_clip_not_visible_from_video_tracks() {
        let mut project = test_project(24.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("clip-2", 24, Direction::Out, TrackType::Video),
        );
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Clip not found"));

        let outcome = trim_clip_by_frames(
            &mut project,
            &request("clip-2", 24, Direction::Out, TrackType::Audio),
        );
        assert!(outcome.success);
    }

    #[test]
    fn test_unknown_clip_reports_not_found() {
        let mut project = test_project(24.0);
        let outcome = trim_clip_by_frames(
            &mut project,
            &request("no-such-clip", 24, Direction::Out, TrackType::Video),
        );
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Clip not found"));
    }

    #[test]
    fn test_unknown_sequence_reports_not_found() {
        let mut project = test_project(24.0);
        let mut req = request("clip-1", 24, Direction::Out, TrackType::Video);
        req.sequence_id = 7;
        let outcome = trim_clip_by_frames(&mut project, &req);
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Sequence not found"));
    }

    #[test]
    fn test_positional_round_trip() {
        let req = request("clip-1", -6, Direction::In, TrackType::Audio);
        let rebuilt = TrimRequest::from_positional(&req.to_positional()).unwrap();
        assert_eq!(rebuilt.clip_id, "clip-1");
        assert_eq!(rebuilt.frames_delta, -6);
        assert_eq!(rebuilt.direction, Direction::In);
        assert_eq!(rebuilt.track_type, TrackType::Audio);
    }

    #[test]
    fn test_positional_rejects_oversized_sequence_id() {
        let mut args = request("clip-1", 1, Direction::In, TrackType::Video).to_positional();
        args[0] = Value::from(u64::from(u32::MAX) + 1);
        let err = TrimRequest::from_positional(&args).unwrap_err();
        assert!(err.to_string().contains("sequenceId"));
    }

    #[test]
    fn test_positional_rejects_bad_direction() {
        let mut args = request("clip-1", 1, Direction::In, TrackType::Video).to_positional();
        args[3] = Value::from("sideways");
        let err = TrimRequest::from_positional(&args).unwrap_err();
        assert!(err.to_string().contains("direction"));
    }
}
