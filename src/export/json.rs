// src/export/json.rs
use chrono::Utc;
use serde_json::json;
use std::error::Error;

use crate::config;
use crate::consts::MASKED_PLACEHOLDER;
use crate::storage::CredentialStore;

/// How secret values appear in an exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    Redacted,
    Cleartext,
}

/// Cleartext export must be opted into via config
pub fn default_export_mode() -> ExportMode {
    if config::load().features.allow_insecure_export {
        ExportMode::Cleartext
    } else {
        ExportMode::Redacted
    }
}

/// Export all stored credentials to a JSON file.
///
/// SECURITY WARNING: a cleartext export contains every secret as-is.
/// Protect the output file accordingly.
pub fn export_to_json<S: CredentialStore>(
    store: &S,
    path: &str,
    mode: ExportMode,
) -> Result<(), Box<dyn Error>> {
    let credentials = store.list()?;

    let entries: Vec<_> = credentials
        .iter()
        .map(|cred| {
            let secret = match mode {
                ExportMode::Cleartext => cred.secret.as_str(),
                ExportMode::Redacted => MASKED_PLACEHOLDER,
            };
            json!({
                "id": cred.id,
                "service": cred.service,
                "username": cred.username,
                "secret": secret,
                "url": cred.url,
                "notes": cred.notes,
                "created_at": cred.created_at,
                "updated_at": cred.updated_at,
            })
        })
        .collect();

    if mode == ExportMode::Cleartext {
        tracing::warn!(path, "exporting credentials in cleartext");
    }

    let doc = json!({
        "format": "json-v1",
        "exported_at": Utc::now().to_rfc3339(),
        "redacted": mode == ExportMode::Redacted,
        "credentials": entries,
    });

    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
