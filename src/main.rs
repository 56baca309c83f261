//! gamed - game server operator console.
//!
//! Builds the command registry once, then reads lines from stdin and feeds
//! them through the trusted console entry point until EOF.

use gamed::commands::{Dispatcher, Registry, StatsGroup, UptimeGroup, VersionGroup};
use gamed::config::{Config, ConfigError};
use std::io::BufRead;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    gamed::telemetry::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gamed.toml".to_string());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %config_path, "No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            error!(path = %config_path, error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    info!(
        server = %config.server.name,
        prefix = %config.commands.prefix,
        "Starting gamed console"
    );

    // Registry construction happens exactly once, before any dispatch is
    // reachable. Game-side command groups register here as they are added.
    let registry = Registry::builder()
        .with_builtins()
        .register(VersionGroup::descriptor(), Box::new(VersionGroup))
        .register(UptimeGroup::descriptor(), Box::new(UptimeGroup::new()))
        .register(StatsGroup::descriptor(), Box::new(StatsGroup::new()))
        .build();
    let dispatcher = Dispatcher::new(registry, config.commands.prefix);

    info!(commands = dispatcher.registry().len(), "Command registry ready");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        dispatcher.parse_console(&line?);
    }

    info!("Console closed, shutting down");
    Ok(())
}
