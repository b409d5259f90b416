//! AlgoLab Visualization Server
//!
//! Preload every algorithm with its default input and serve playback.

use algolab_vis::{Error, VisConfig, VisServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algolab_vis=info,algolab_steps=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = VisConfig::from_env()?;

    // Optional positional port overrides ALGOLAB_ADDR's port
    if let Some(arg) = env::args().nth(1) {
        let port: u16 = arg
            .parse()
            .map_err(|_| Error::Config(format!("invalid port: {}", arg)))?;
        config = config.with_port(port);
    }

    println!("AlgoLab Visualizer");
    println!("==================");
    println!();
    println!("Default speed: {:?}", config.speed);
    println!("Open http://localhost:{} in a client to start playback.", config.addr.port());
    println!();

    let server = VisServer::from_config(&config)?;
    server.serve(config.addr).await?;

    Ok(())
}
