// src/provision/mod.rs
//! Key provisioning: guarantee exactly one durable encryption key
//!
//! The pure half (`ensure_key`) decides what the file should contain;
//! the thin I/O shell (`provision_file`) checks, locks, and persists.
//! Re-running provisioning never rotates an existing key.

pub mod env_file;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::consts::ENCRYPTION_KEY_VAR;
use crate::error::CoreError;
use crate::key_ops::{encode_key, is_valid_key_value, KeyGenerator};

use env_file::EnvFile;

/// What a provisioning run did to the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// A non-empty entry already existed and was left untouched
    AlreadyProvisioned,
    /// The entry was absent or empty and a fresh key was written
    Generated,
}

/// Pure provisioning core: config contents in, config contents out.
///
/// Only an absent or empty entry triggers generation; every other line
/// of the file is preserved unchanged.
pub fn ensure_key(
    contents: &str,
    generator: &dyn KeyGenerator,
) -> Result<(String, ProvisionOutcome), CoreError> {
    let mut env = EnvFile::parse(contents);

    match env.get(ENCRYPTION_KEY_VAR) {
        Some(value) if !value.is_empty() => {
            if !is_valid_key_value(value) {
                warn!(
                    "existing {} entry is not a valid encoded key; leaving it untouched",
                    ENCRYPTION_KEY_VAR
                );
            }
            Ok((contents.to_string(), ProvisionOutcome::AlreadyProvisioned))
        }
        _ => {
            let key = generator.generate()?;
            env.set(ENCRYPTION_KEY_VAR, &encode_key(&key));
            Ok((env.render(), ProvisionOutcome::Generated))
        }
    }
}

/// Provision the configuration file at `path`.
///
/// A missing file is a deployment mistake, not something to paper over
/// with a fabricated config: it fails with `ConfigurationMissing` and
/// performs no filesystem writes.
pub fn provision_file(
    path: &Path,
    generator: &dyn KeyGenerator,
) -> Result<ProvisionOutcome, CoreError> {
    if !path.exists() {
        return Err(CoreError::ConfigurationMissing(path.to_path_buf()));
    }

    // Held across the whole read-modify-write so two concurrent runs
    // cannot both generate a key and overwrite each other's result.
    let _lock = ProvisionLock::acquire(path)?;

    let contents = fs::read_to_string(path)?;
    let (updated, outcome) = ensure_key(&contents, generator)?;

    if outcome == ProvisionOutcome::Generated {
        write_atomic(path, &updated)?;
        info!(path = %path.display(), "provisioned new encryption key");
    }

    Ok(outcome)
}

/// Exclusive lock file guarding the configuration write
struct ProvisionLock {
    path: PathBuf,
}

impl ProvisionLock {
    fn acquire(config_path: &Path) -> Result<Self, CoreError> {
        let mut os_path = config_path.as_os_str().to_owned();
        os_path.push(".lock");
        let path = PathBuf::from(os_path);

        // create_new is the exclusivity guarantee; contention is an
        // error, never a retry
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(CoreError::WriteFailed)?;

        Ok(Self { path })
    }
}

impl Drop for ProvisionLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), CoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".provision-")
        .tempfile_in(dir)
        .map_err(CoreError::WriteFailed)?;
    tmp.write_all(contents.as_bytes())
        .map_err(CoreError::WriteFailed)?;
    tmp.persist(path)
        .map_err(|err| CoreError::WriteFailed(err.error))?;
    Ok(())
}
