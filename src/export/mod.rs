// src/export/mod.rs
//! Export formats for stored credentials

pub use json::{default_export_mode, export_to_json, ExportMode};

mod json;
