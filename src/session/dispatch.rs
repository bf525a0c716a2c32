// src/session/dispatch.rs
//! Drives dashboard effects against the collaborator boundaries

use std::io;

use tracing::{info, warn};

use crate::error::CoreError;
use crate::session::clipboard::Clipboard;
use crate::session::dashboard::{Dashboard, DashboardCommand, DashboardEffect};
use crate::session::surface::{blocking_confirm, ConfirmSurface};
use crate::storage::{CredentialId, CredentialStore};

type FallbackConfirm = Box<dyn FnMut(&str) -> io::Result<bool>>;

pub struct Dispatcher<S, C, U> {
    store: S,
    clipboard: C,
    surface: U,
    fallback_confirm: FallbackConfirm,
}

impl<S, C, U> Dispatcher<S, C, U>
where
    S: CredentialStore,
    C: Clipboard,
    U: ConfirmSurface,
{
    pub fn new(store: S, clipboard: C, surface: U) -> Self {
        Self {
            store,
            clipboard,
            surface,
            fallback_confirm: Box::new(blocking_confirm),
        }
    }

    /// Replace the synchronous confirmation fallback (tests, embedders)
    pub fn with_fallback_confirm(
        mut self,
        fallback: impl FnMut(&str) -> io::Result<bool> + 'static,
    ) -> Self {
        self.fallback_confirm = Box::new(fallback);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// Load the credential list from storage into a fresh dashboard
    pub fn open_dashboard(&self) -> Result<Dashboard, CoreError> {
        Ok(Dashboard::new(self.store.list()?))
    }

    /// Apply a user command and run any resulting effect to completion
    pub fn handle(
        &mut self,
        dashboard: &mut Dashboard,
        command: DashboardCommand,
    ) -> Result<(), CoreError> {
        let effect = dashboard.apply(command);
        self.run_effect(dashboard, effect)
    }

    fn run_effect(
        &mut self,
        dashboard: &mut Dashboard,
        effect: DashboardEffect,
    ) -> Result<(), CoreError> {
        match effect {
            DashboardEffect::None | DashboardEffect::AutoLocked { .. } => Ok(()),
            DashboardEffect::CopyRequested { id, secret } => self.copy(dashboard, id, &secret),
            DashboardEffect::ConfirmRequested { id: _, label } => self.confirm(dashboard, &label),
            DashboardEffect::DeleteConfirmed { id } => self.delete(dashboard, id),
        }
    }

    /// Primary clipboard, then manual-selection fallback, then a direct
    /// notice. An un-signaled failure could leave a stale clipboard the
    /// user trusts, so there is no silent path out of here.
    fn copy(
        &mut self,
        dashboard: &mut Dashboard,
        id: CredentialId,
        secret: &str,
    ) -> Result<(), CoreError> {
        let copied = match self.clipboard.set_text(secret) {
            Ok(()) => Ok(()),
            Err(CoreError::ClipboardUnavailable) => self.surface.manual_copy(secret),
            Err(err) => Err(err),
        };

        match copied {
            Ok(()) => {
                dashboard.apply(DashboardCommand::CopyConfirmed(id));
            }
            Err(err) => {
                warn!(%err, "copy failed on both clipboard paths");
                dashboard.apply(DashboardCommand::CopyFailed(id));
                if let Some(notice) = dashboard.notice() {
                    let notice = notice.to_string();
                    self.surface.notify(&notice);
                }
            }
        }
        Ok(())
    }

    fn confirm(&mut self, dashboard: &mut Dashboard, label: &str) -> Result<(), CoreError> {
        let confirmed = match self.surface.confirm_delete(label) {
            Ok(choice) => choice,
            Err(CoreError::ConfirmationUnavailable) => (self.fallback_confirm)(label)?,
            Err(err) => return Err(err),
        };

        let command = if confirmed {
            DashboardCommand::ConfirmDelete
        } else {
            DashboardCommand::CancelDelete
        };
        let effect = dashboard.apply(command);
        self.run_effect(dashboard, effect)
    }

    fn delete(&mut self, dashboard: &mut Dashboard, id: CredentialId) -> Result<(), CoreError> {
        self.store.delete(id)?;
        info!(id, "credential deleted after explicit confirmation");
        dashboard.set_rows(self.store.list()?);
        Ok(())
    }
}
