// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub server: Server,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub env_file: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub port: u16,
    pub scan_ports: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub allow_insecure_export: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("PASSVAULT_CONFIG").unwrap_or_else(|_| "passvault.toml".to_string());

        let mut conf = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read passvault.toml");
            toml::from_str(&content).expect("Invalid TOML in passvault.toml")
        } else {
            eprintln!("Warning: passvault.toml not found, using built-in defaults");
            Config {
                paths: default_paths(),
                server: default_server(),
                features: default_features(),
            }
        };

        // Test mode override: cleartext export is never allowed
        if std::env::var("PASSVAULT_TEST_MODE").is_ok() {
            conf.features.allow_insecure_export = false;
        }

        conf
    })
}
