// src/session/clipboard.rs
//! Platform clipboard boundary
//!
//! The real clipboard lives in the embedding UI; the session only sees
//! this trait. `ClipboardUnavailable` routes the dispatcher to the
//! manual-selection fallback; any other failure is terminal for the
//! copy attempt.

use crate::error::CoreError;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError>;
}

/// In-memory clipboard for tests and headless drivers
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that is never available, for environments without one
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), CoreError> {
        Err(CoreError::ClipboardUnavailable)
    }
}
