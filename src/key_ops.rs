// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Handles master-key generation, the string representations written
//! to the environment file, and validation of provisioned entries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::{MasterKey32, RandomMasterKey32, SecureRandomExt};
use crate::consts::MASTER_KEY_LEN;
use crate::error::CoreError;

pub type Key = MasterKey32;

/// Generate a new random 256-bit master key
#[inline]
pub fn generate_key() -> Key {
    Key::new(**RandomMasterKey32::new())
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
}

pub fn key_representations(key: &Key) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
    }
}

/// Encoding used for the provisioned entry value
pub fn encode_key(key: &Key) -> String {
    STANDARD.encode(key.expose_secret())
}

/// A provisioned entry is valid when it decodes to a full-length key
pub fn is_valid_key_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    matches!(STANDARD.decode(trimmed), Ok(bytes) if bytes.len() == MASTER_KEY_LEN)
}

/// Key-generation collaborator boundary
///
/// Provisioning only ever sees this trait; the default implementation
/// draws from the OS RNG through secure-gate.
pub trait KeyGenerator {
    fn generate(&self) -> Result<Key, CoreError>;
}

/// Default generator backed by the OS RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsKeyGenerator;

impl KeyGenerator for OsKeyGenerator {
    fn generate(&self) -> Result<Key, CoreError> {
        Ok(generate_key())
    }
}
