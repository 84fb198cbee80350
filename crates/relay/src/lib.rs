// Scripting relay: accepts editing commands over HTTP and forwards them to
// the Premiere Pro scripting engine through a host-script invoker.

pub mod api;
pub mod config;
pub mod invoker;
pub mod project;
pub mod script_host;
pub mod trim;

pub use invoker::{HostScriptInvoker, InvokeError, ScriptOutcome};
pub use script_host::ProjectScriptHost;
pub use trim::{trim_clip_by_frames, Direction, TrackType, TrimRequest, TRIM_FUNCTION};
