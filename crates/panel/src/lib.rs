//! # Montage Panel Client
//!
//! Typed HTTP client for the control-plane server exposed by the Premiere Pro
//! CEP panel extension. The panel holds the live connection to the running
//! Premiere Pro instance and answers JSON queries and commands on a local
//! port; this crate wraps each endpoint in a typed method.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use montage_panel::{PanelClient, PanelReply, PanelResult};
//!
//! #[tokio::main]
//! async fn main() -> PanelResult<()> {
//!     let client = PanelClient::builder()
//!         .base_url("http://127.0.0.1:3001")
//!         .build()?;
//!
//!     match client.project_stats().await? {
//!         PanelReply::Payload(stats) => {
//!             println!("Project: {}", stats.project_name.as_deref().unwrap_or("Unknown"));
//!         }
//!         PanelReply::Condition(msg) => println!("Panel reported: {}", msg),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main client
pub use client::{PanelClient, PanelClientBuilder, PanelReply};
pub use config::PanelConfig;
pub use error::{PanelError, PanelResult};
