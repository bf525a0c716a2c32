// src/lib.rs
//! passvault: provisioning and dashboard-session core for a password manager
//!
//! Features:
//! - One-shot, idempotent encryption-key provisioning into a KEY=VALUE env file
//! - Dashboard session state machine with a single shared auto-lock countdown
//! - Clipboard copy confirmation and destructive-action confirmation flows
//! - SQLite-backed credential storage boundary

pub mod aliases;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod key_ops;
pub mod launch;
pub mod provision;
pub mod session;
pub mod storage;

// Re-export everything users need at the crate root
pub use aliases::MasterKey32;
pub use config::load as load_config;
pub use error::CoreError;
pub use export::{export_to_json, ExportMode};
pub use key_ops::{generate_key, KeyGenerator, OsKeyGenerator};
pub use provision::{ensure_key, provision_file, ProvisionOutcome};
pub use session::{Dashboard, DashboardCommand, DashboardEffect, Dispatcher};
pub use storage::{Credential, CredentialStore, MemoryStore, SqliteStore};

pub type Result<T> = std::result::Result<T, CoreError>;
