//! Chat room server.
//!
//! Participants poll the HTTP API; inactive participants are removed by a
//! periodic sweep.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yoriai-server -- --port 5000
//! ```

use std::time::Duration;

use clap::Parser;
use yoriai_server::{PresenceConfig, ServerConfig};
use yoriai_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "yoriai-server", about = "Polling chat room server", version)]
struct Args {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Seconds between two inactivity sweeps.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    sweep_interval_secs: u64,

    /// Seconds of silence after which a participant is removed.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    stale_after_secs: u64,

    /// Default log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            presence: PresenceConfig {
                sweep_interval: Duration::from_secs(args.sweep_interval_secs),
                stale_after: Duration::from_secs(args.stale_after_secs),
            },
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = ServerConfig::from(&args);
    if config.presence.stale_after >= config.presence.sweep_interval {
        tracing::warn!(
            "stale threshold ({:?}) is not shorter than the sweep interval ({:?}); evictions may lag",
            config.presence.stale_after,
            config.presence.sweep_interval
        );
    }

    // Run the server
    if let Err(e) = yoriai_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
