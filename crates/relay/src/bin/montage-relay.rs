// Standalone scripting-relay binary

use anyhow::Result;
use clap::Parser;
use montage_relay::config::RelayConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "montage-relay")]
#[command(about = "HTTP-to-ExtendScript relay for Premiere Pro timeline edits", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "montage.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "4000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "montage_relay=info,tower_http=debug".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Starting Montage scripting relay");

    let config = RelayConfig::load(&args.config)?;
    let invoker = config.bridge.build_invoker();

    let addr = format!("{}:{}", args.host, args.port);
    montage_relay::api::serve(&addr, invoker).await?;

    Ok(())
}
