//! Main client for the control-plane server.

use crate::config::PanelConfig;
use crate::error::{PanelError, PanelResult};
use crate::types::*;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Outcome of a successful round-trip to the panel server.
///
/// The panel signals domain-level conditions ("no project open", "no active
/// sequence") through an `error` field in an otherwise successful response.
/// Those are not failures of this client, so they surface as `Condition`
/// rather than through `Err`.
#[derive(Debug, Clone)]
pub enum PanelReply<T> {
    /// The requested document.
    Payload(T),
    /// A condition reported by the panel, verbatim.
    Condition(String),
}

/// Client for the CEP panel's local HTTP API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    http: Client,
    base_url: Url,
}

impl PanelClient {
    /// Create a new client builder.
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: PanelConfig) -> PanelResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Project-level statistics (`GET /api/project-stats`).
    pub async fn project_stats(&self) -> PanelResult<PanelReply<ProjectStats>> {
        self.get("/api/project-stats").await
    }

    /// Details of the currently active sequence (`GET /api/active-sequence`).
    pub async fn active_sequence(&self) -> PanelResult<PanelReply<ActiveSequence>> {
        self.get("/api/active-sequence").await
    }

    /// All sequences in the project (`GET /api/sequences`).
    pub async fn sequences(&self) -> PanelResult<PanelReply<SequenceList>> {
        self.get("/api/sequences").await
    }

    /// Details of one sequence by name (`GET /api/sequence-details?name=`).
    pub async fn sequence_details(&self, name: &str) -> PanelResult<PanelReply<SequenceDetails>> {
        let url = self.build_url("/api/sequence-details")?;
        debug!(url = %url, name, "GET request with query");
        let response = self
            .http
            .get(url)
            .query(&[("name", name)])
            .send()
            .await?;
        Self::read_reply(response).await
    }

    /// Track structure of the active sequence (`GET /api/timeline-structure`).
    pub async fn timeline_structure(&self) -> PanelResult<PanelReply<TimelineStructure>> {
        self.get("/api/timeline-structure").await
    }

    /// All clips in the active sequence (`GET /api/timeline-clips`).
    pub async fn timeline_clips(&self) -> PanelResult<PanelReply<TimelineClips>> {
        self.get("/api/timeline-clips").await
    }

    /// Media items in the project browser (`GET /api/project-media`).
    pub async fn project_media(&self) -> PanelResult<PanelReply<ProjectMedia>> {
        self.get("/api/project-media").await
    }

    /// Project bin structure (`GET /api/project-bins`).
    pub async fn project_bins(&self) -> PanelResult<PanelReply<ProjectBins>> {
        self.get("/api/project-bins").await
    }

    /// Playhead position and playback state (`GET /api/playhead`).
    pub async fn playhead(&self) -> PanelResult<PanelReply<Playhead>> {
        self.get("/api/playhead").await
    }

    /// Current clip or time-range selection (`GET /api/selection`).
    pub async fn selection(&self) -> PanelResult<PanelReply<Selection>> {
        self.get("/api/selection").await
    }

    /// Available export presets (`GET /api/export-presets`).
    pub async fn export_presets(&self) -> PanelResult<PanelReply<ExportPresets>> {
        self.get("/api/export-presets").await
    }

    /// Render queue contents (`GET /api/render-queue`).
    pub async fn render_queue(&self) -> PanelResult<PanelReply<RenderQueue>> {
        self.get("/api/render-queue").await
    }

    /// Create a new sequence (`POST /api/create-sequence`).
    pub async fn create_sequence(
        &self,
        req: &CreateSequenceRequest,
    ) -> PanelResult<PanelReply<CreatedSequence>> {
        self.post("/api/create-sequence", req).await
    }

    /// Export the active sequence (`POST /api/export-project`).
    pub async fn export_project(&self, req: &ExportRequest) -> PanelResult<PanelReply<ExportStatus>> {
        self.post("/api/export-project", req).await
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> PanelResult<Url> {
        self.base_url.join(path).map_err(PanelError::InvalidUrl)
    }

    /// Execute a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> PanelResult<PanelReply<T>> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");
        let response = self.http.get(url).send().await?;
        Self::read_reply(response).await
    }

    /// Execute a POST request with a JSON body.
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> PanelResult<PanelReply<T>> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");
        let response = self.http.post(url).json(body).send().await?;
        Self::read_reply(response).await
    }

    /// Turn an HTTP response into a reply, separating transport failures from
    /// panel-reported conditions.
    async fn read_reply<T: DeserializeOwned>(response: Response) -> PanelResult<PanelReply<T>> {
        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason();
            let body = response.text().await.unwrap_or_default();
            return Err(PanelError::from_response(status.as_u16(), reason, &body));
        }

        let value: serde_json::Value = response.json().await?;
        if let Some(condition) = value.get("error").and_then(|e| e.as_str()) {
            return Ok(PanelReply::Condition(condition.to_string()));
        }

        Ok(PanelReply::Payload(serde_json::from_value(value)?))
    }
}

/// Builder for creating a [`PanelClient`].
pub struct PanelClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl PanelClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL of the panel server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. Without an explicit base URL the environment and
    /// then the default local panel address are used.
    pub fn build(self) -> PanelResult<PanelClient> {
        let config = match self.base_url {
            Some(url) => PanelConfig {
                base_url: Url::parse(&url)?,
                timeout: self.timeout,
            },
            None => {
                let mut config = PanelConfig::from_env()?;
                config.timeout = self.timeout;
                config
            }
        };

        PanelClient::from_config(config)
    }
}

impl Default for PanelClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
