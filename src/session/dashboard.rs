// src/session/dashboard.rs
//! Dashboard state machine: reveal/mask toggling, the shared auto-lock
//! countdown, copy feedback, delete confirmation, search filtering
//!
//! All transient display state lives in `Dashboard`; handlers receive
//! the context explicitly and the clock is injected through `tick`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::consts::{AUTO_LOCK_MS, COPY_FEEDBACK_MS, MASKED_PLACEHOLDER};
use crate::storage::{Credential, CredentialId};

/// Per-displayed-credential visibility; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

/// User actions dispatched to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    ToggleSecret(CredentialId),
    SetFilter(String),
    CopySecret(CredentialId),
    /// A copy reached the clipboard (primary or fallback path)
    CopyConfirmed(CredentialId),
    /// Both copy paths failed
    CopyFailed(CredentialId),
    RequestDelete(CredentialId),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
}

/// What the surrounding driver must do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEffect {
    None,
    CopyRequested { id: CredentialId, secret: String },
    ConfirmRequested { id: CredentialId, label: String },
    DeleteConfirmed { id: CredentialId },
    AutoLocked { masked: Vec<CredentialId> },
}

/// A delete awaiting explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: CredentialId,
    pub label: String,
}

/// Row snapshot handed to a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: CredentialId,
    pub service: String,
    pub username: String,
    pub secret: String,
    pub url: Option<String>,
    pub visibility: Visibility,
    pub copy_confirmed: bool,
}

#[derive(Debug)]
pub struct Dashboard {
    rows: Vec<Credential>,
    revealed: BTreeSet<CredentialId>,
    filter: String,
    /// Single shared countdown; `Some` only while a row is revealed
    lock_remaining_ms: Option<u64>,
    copy_feedback: BTreeMap<CredentialId, u64>,
    pending_delete: Option<PendingDelete>,
    notice: Option<String>,
}

impl Dashboard {
    pub fn new(rows: Vec<Credential>) -> Self {
        Self {
            rows,
            revealed: BTreeSet::new(),
            filter: String::new(),
            lock_remaining_ms: None,
            copy_feedback: BTreeMap::new(),
            pending_delete: None,
            notice: None,
        }
    }

    /// Replace the credential snapshot, dropping transient state for
    /// rows that no longer exist
    pub fn set_rows(&mut self, rows: Vec<Credential>) {
        let ids: BTreeSet<CredentialId> = rows.iter().map(|cred| cred.id).collect();
        self.revealed.retain(|id| ids.contains(id));
        self.copy_feedback.retain(|id, _| ids.contains(id));
        if let Some(pending) = &self.pending_delete {
            if !ids.contains(&pending.id) {
                self.pending_delete = None;
            }
        }
        if self.revealed.is_empty() {
            self.lock_remaining_ms = None;
        }
        self.rows = rows;
    }

    pub fn apply(&mut self, command: DashboardCommand) -> DashboardEffect {
        match command {
            DashboardCommand::ToggleSecret(id) => self.toggle_secret(id),
            DashboardCommand::SetFilter(query) => {
                self.filter = query;
                DashboardEffect::None
            }
            DashboardCommand::CopySecret(id) => match self.find(id) {
                Some(row) => DashboardEffect::CopyRequested {
                    id,
                    secret: row.secret.clone(),
                },
                None => DashboardEffect::None,
            },
            DashboardCommand::CopyConfirmed(id) => {
                if self.find(id).is_some() {
                    // A later copy supersedes the running indicator
                    self.copy_feedback.insert(id, COPY_FEEDBACK_MS);
                }
                DashboardEffect::None
            }
            DashboardCommand::CopyFailed(id) => {
                self.copy_feedback.remove(&id);
                self.notice = Some(String::from(
                    "Automatic copy failed. Select the value and copy it manually.",
                ));
                DashboardEffect::None
            }
            DashboardCommand::RequestDelete(id) => match self.find(id) {
                Some(row) => {
                    let label = row.service.clone();
                    self.pending_delete = Some(PendingDelete {
                        id,
                        label: label.clone(),
                    });
                    DashboardEffect::ConfirmRequested { id, label }
                }
                None => DashboardEffect::None,
            },
            DashboardCommand::ConfirmDelete => match self.pending_delete.take() {
                Some(pending) => DashboardEffect::DeleteConfirmed { id: pending.id },
                None => DashboardEffect::None,
            },
            DashboardCommand::CancelDelete => {
                self.pending_delete = None;
                DashboardEffect::None
            }
            DashboardCommand::DismissNotice => {
                self.notice = None;
                DashboardEffect::None
            }
        }
    }

    fn toggle_secret(&mut self, id: CredentialId) -> DashboardEffect {
        if self.find(id).is_none() {
            return DashboardEffect::None;
        }
        if self.revealed.remove(&id) {
            if self.revealed.is_empty() {
                self.lock_remaining_ms = None;
            }
        } else {
            self.revealed.insert(id);
            // Reveal restarts the shared countdown at the full duration,
            // superseding any pending expiry. Never additive.
            self.lock_remaining_ms = Some(AUTO_LOCK_MS);
        }
        DashboardEffect::None
    }

    /// Advance the session clock.
    ///
    /// Countdown expiry masks every revealed row in the same step.
    pub fn tick(&mut self, elapsed_ms: u64) -> DashboardEffect {
        if elapsed_ms == 0 {
            return DashboardEffect::None;
        }

        self.copy_feedback.retain(|_, remaining| {
            if elapsed_ms >= *remaining {
                false
            } else {
                *remaining -= elapsed_ms;
                true
            }
        });

        if let Some(remaining) = self.lock_remaining_ms {
            if elapsed_ms >= remaining {
                self.lock_remaining_ms = None;
                let masked: Vec<CredentialId> =
                    std::mem::take(&mut self.revealed).into_iter().collect();
                if !masked.is_empty() {
                    return DashboardEffect::AutoLocked { masked };
                }
            } else {
                self.lock_remaining_ms = Some(remaining - elapsed_ms);
            }
        }

        DashboardEffect::None
    }

    pub fn visibility(&self, id: CredentialId) -> Visibility {
        if self.revealed.contains(&id) {
            Visibility::Revealed
        } else {
            Visibility::Masked
        }
    }

    pub fn is_copy_confirmed(&self, id: CredentialId) -> bool {
        self.copy_feedback.contains_key(&id)
    }

    pub fn lock_remaining_ms(&self) -> Option<u64> {
        self.lock_remaining_ms
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Filtered row snapshots for rendering
    pub fn rows(&self) -> Vec<RowView> {
        let query = self.filter.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|cred| {
                if query.is_empty() {
                    return true;
                }
                cred.service.to_lowercase().contains(&query)
                    || cred.username.to_lowercase().contains(&query)
                    || cred
                        .url
                        .as_deref()
                        .map(|url| url.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .map(|cred| {
                let visibility = self.visibility(cred.id);
                RowView {
                    id: cred.id,
                    service: cred.service.clone(),
                    username: cred.username.clone(),
                    secret: match visibility {
                        Visibility::Revealed => cred.secret.clone(),
                        Visibility::Masked => MASKED_PLACEHOLDER.to_string(),
                    },
                    url: cred.url.clone(),
                    visibility,
                    copy_confirmed: self.is_copy_confirmed(cred.id),
                }
            })
            .collect()
    }

    fn find(&self, id: CredentialId) -> Option<&Credential> {
        self.rows.iter().find(|cred| cred.id == id)
    }
}
