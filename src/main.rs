//! flowgate - chat-service to IRC gateway
//!
//! Reads client lines and chat-service payloads on stdin and writes IRC
//! replies to stdout. Logs go to stderr.

mod config;
mod error;
mod events;
mod gateway;
mod handlers;
mod proto;
mod registry;
mod render;
mod state;
mod telemetry;

use crate::config::{Config, LoggingConfig};
use crate::gateway::Gateway;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flowgate.toml".to_string());

    // Logging depends on config, so a load failure is reported with defaults.
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            telemetry::init(&LoggingConfig::default());
            error!(path = %config_path, error = %e, "Failed to load config");
            return Err(e.into());
        }
    };
    telemetry::init(&config.logging);

    info!(
        server = %config.server.name,
        network = %config.server.network,
        nick = %config.session.nick,
        "Starting flowgate"
    );

    let (gateway, mut replies) = Gateway::new(&config)?;

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = replies.recv().await {
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\r\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    // Split on raw bytes: decoding is per line so bad input only costs that line.
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    loop {
        tokio::select! {
            line = lines.next_segment() => match line? {
                Some(line) => gateway.handle_raw(&line),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    info!(stats = ?gateway.command_stats(), "Command usage");

    // Dropping the gateway closes the reply stream so the writer can finish.
    drop(gateway);
    writer.await??;

    info!("Shutdown complete");
    Ok(())
}
