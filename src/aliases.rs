// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical key types used throughout passvault.

pub use secure_gate::{fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(MasterKey32, 32); // 256-bit master encryption key

// Random secrets
random_alias!(RandomMasterKey32, 32);
