// src/config/defaults.rs
use crate::config::app::{Features, Paths, Server};
use crate::consts::DEFAULT_PORT;

pub const DEFAULT_ENV_FILE: &str = ".env";

pub fn default_paths() -> Paths {
    let database = dirs::data_local_dir()
        .map(|dir| dir.join("passvault").join("credentials.db"))
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| "instance/credentials.db".to_string());

    Paths {
        env_file: DEFAULT_ENV_FILE.into(),
        database,
    }
}

pub fn default_server() -> Server {
    Server {
        port: DEFAULT_PORT,
        scan_ports: true,
    }
}

pub fn default_features() -> Features {
    Features {
        allow_insecure_export: false,
    }
}
