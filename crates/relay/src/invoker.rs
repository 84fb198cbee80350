//! Host-script invocation seam.
//!
//! The relay and the trim tool never talk to the scripting engine directly;
//! they go through [`HostScriptInvoker`]. The production implementation
//! shells out to a configured bridge executable, the in-process
//! implementation lives in [`crate::script_host`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Errors from invoking a host-script function.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The bridge process could not be launched or completed.
    #[error("failed to run host bridge: {0}")]
    Launch(#[from] std::io::Error),

    /// The bridge process exited unsuccessfully.
    #[error("host bridge exited with status {status}: {stderr}")]
    Bridge { status: i32, stderr: String },

    /// The scripting engine's response was not valid JSON. The raw text is
    /// preserved for diagnosis.
    #[error("Failed to parse ExtendScript result")]
    Parse { raw: String },

    /// No host function with that name is known.
    #[error("unknown host function: {0}")]
    UnknownFunction(String),

    /// Arguments did not match the function's signature.
    #[error("invalid arguments: {0}")]
    Args(String),

    /// JSON (de)serialization failure on the invoker side.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structured result of a host-script editing procedure.
///
/// "Not found" outcomes are reported here, not raised as [`InvokeError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw engine output, kept when it could not be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ScriptOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            raw: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            raw: None,
        }
    }

    pub fn unparseable(error: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            raw: Some(raw.into()),
        }
    }
}

/// Executor of named host-script functions.
#[async_trait::async_trait]
pub trait HostScriptInvoker: Send + Sync {
    /// Invoke `function` with positional JSON arguments and return the parsed
    /// JSON result.
    async fn invoke(&self, function: &str, args: &[Value]) -> Result<Value, InvokeError>;
}

/// Invoker that runs a bridge executable per call.
///
/// The bridge receives the function name followed by each argument JSON
/// encoded, and must print the engine's JSON result on stdout.
pub struct CommandInvoker {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl CommandInvoker {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            leading_args: Vec::new(),
        }
    }

    /// Prepend fixed arguments (e.g. a script path) before the function name.
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }
}

#[async_trait::async_trait]
impl HostScriptInvoker for CommandInvoker {
    async fn invoke(&self, function: &str, args: &[Value]) -> Result<Value, InvokeError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg(function)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for arg in args {
            command.arg(serde_json::to_string(arg)?);
        }

        debug!(program = %self.program.display(), function, "invoking host bridge");
        let output = command.output().await?;

        if !output.status.success() {
            return Err(InvokeError::Bridge {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(stdout.trim()).map_err(|_| InvokeError::Parse {
            raw: stdout.trim().to_string(),
        })
    }
}
