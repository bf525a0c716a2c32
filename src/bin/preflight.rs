// src/bin/preflight.rs
//! Preflight: provision the environment file and pick a serving port

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use passvault::config;
use passvault::consts::PORT_SCAN_LIMIT;
use passvault::key_ops::OsKeyGenerator;
use passvault::launch::next_free_port;
use passvault::provision::{provision_file, ProvisionOutcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load();

    let env_path = Path::new(&config.paths.env_file);
    let outcome = provision_file(env_path, &OsKeyGenerator)
        .with_context(|| format!("provisioning failed for {}", env_path.display()))?;

    match outcome {
        ProvisionOutcome::Generated => info!("encryption key generated and saved"),
        ProvisionOutcome::AlreadyProvisioned => {
            info!("encryption key already present, left untouched")
        }
    }

    let mut port = config.server.port;
    if config.server.scan_ports {
        match next_free_port(config.server.port, PORT_SCAN_LIMIT) {
            Some(free) => port = free,
            None => warn!(
                "no free port within {} of {}, keeping the configured port",
                PORT_SCAN_LIMIT, config.server.port
            ),
        }
    }

    if port != config.server.port {
        warn!("port {} is busy, serving on {}", config.server.port, port);
    }
    info!(port, database = %config.paths.database, "preflight complete");

    Ok(())
}
