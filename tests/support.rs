// tests/support.rs
//! Test fixtures: sample credentials and scriptable collaborators

use passvault::error::CoreError;
use passvault::session::{Clipboard, ConfirmSurface};
use passvault::storage::Credential;

#[allow(dead_code)] // each integration crate uses a subset
pub fn sample_credentials() -> Vec<Credential> {
    vec![
        credential(1, "GitHub", "octocat", "S3cr3t!", Some("https://github.com")),
        credential(2, "Mail", "oc@example.com", "hunter2", None),
        credential(3, "Bank", "octo", "correct horse", Some("https://bank.example")),
    ]
}

#[allow(dead_code)]
pub fn credential(
    id: i64,
    service: &str,
    username: &str,
    secret: &str,
    url: Option<&str>,
) -> Credential {
    Credential {
        id,
        service: service.to_string(),
        username: username.to_string(),
        secret: secret.to_string(),
        url: url.map(str::to_string),
        notes: None,
        created_at: "2026-01-01T00:00:00+00:00".to_string(),
        updated_at: "2026-01-01T00:00:00+00:00".to_string(),
    }
}

/// Clipboard that fails terminally on every write
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), CoreError> {
        Err(CoreError::ClipboardFailed("simulated failure".to_string()))
    }
}

/// Scriptable confirmation surface that records every interaction
#[derive(Debug)]
#[allow(dead_code)]
pub struct ScriptedSurface {
    /// None simulates an unavailable surface
    pub answer: Option<bool>,
    pub manual_copy_works: bool,
    pub confirm_labels: Vec<String>,
    pub manual_copies: Vec<String>,
    pub notices: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedSurface {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            manual_copy_works: true,
            confirm_labels: Vec::new(),
            manual_copies: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            answer: None,
            manual_copy_works: false,
            confirm_labels: Vec::new(),
            manual_copies: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl ConfirmSurface for ScriptedSurface {
    fn confirm_delete(&mut self, label: &str) -> Result<bool, CoreError> {
        self.confirm_labels.push(label.to_string());
        match self.answer {
            Some(choice) => Ok(choice),
            None => Err(CoreError::ConfirmationUnavailable),
        }
    }

    fn manual_copy(&mut self, secret: &str) -> Result<(), CoreError> {
        if self.manual_copy_works {
            self.manual_copies.push(secret.to_string());
            Ok(())
        } else {
            Err(CoreError::ClipboardFailed(
                "manual fallback unavailable".to_string(),
            ))
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
