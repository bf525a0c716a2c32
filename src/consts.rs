// src/consts.rs
//! Shared constants: session timing, key sizing, defaults

/// Shared auto-lock countdown for revealed secrets (ms)
///
/// One countdown per session, restarted by the most recent reveal.
pub const AUTO_LOCK_MS: u64 = 30_000;

/// How long a copy indicator holds its confirmed state (ms)
pub const COPY_FEEDBACK_MS: u64 = 2_000;

/// Name of the provisioned entry in the environment file
pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Master encryption key length in bytes (256-bit)
pub const MASTER_KEY_LEN: usize = 32;

/// Placeholder shown in place of masked secret values
pub const MASKED_PLACEHOLDER: &str = "••••••••";

/// Default serving port when none is configured
pub const DEFAULT_PORT: u16 = 8080;

/// How many ports above the preferred one the launcher will try
pub const PORT_SCAN_LIMIT: u16 = 20;
