//! In-process script host.
//!
//! Dispatches known host functions to their Rust implementations over a
//! project document held in memory. Used by tests and by headless runs where
//! no bridge executable is configured; the document then starts empty and
//! every edit reports "Sequence not found" instead of pretending success.

use crate::invoker::{HostScriptInvoker, InvokeError};
use crate::project::Project;
use crate::trim::{trim_clip_by_frames, TrimRequest, TRIM_FUNCTION};
use serde_json::Value;
use tokio::sync::Mutex;

/// [`HostScriptInvoker`] backed by an in-memory project document.
pub struct ProjectScriptHost {
    project: Mutex<Project>,
}

impl ProjectScriptHost {
    pub fn new(project: Project) -> Self {
        Self {
            project: Mutex::new(project),
        }
    }

    /// Current state of the document.
    pub async fn snapshot(&self) -> Project {
        self.project.lock().await.clone()
    }
}

impl Default for ProjectScriptHost {
    fn default() -> Self {
        Self::new(Project::default())
    }
}

#[async_trait::async_trait]
impl HostScriptInvoker for ProjectScriptHost {
    async fn invoke(&self, function: &str, args: &[Value]) -> Result<Value, InvokeError> {
        match function {
            TRIM_FUNCTION => {
                let req = TrimRequest::from_positional(args)?;
                let mut project = self.project.lock().await;
                let outcome = trim_clip_by_frames(&mut project, &req);
                Ok(serde_json::to_value(outcome)?)
            }
            other => Err(InvokeError::UnknownFunction(other.to_string())),
        }
    }
}
