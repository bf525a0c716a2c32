// src/session/mod.rs
//! Dashboard session: masking, auto-lock, copy and delete flows
//!
//! The state machine in `dashboard` is pure and clock-agnostic; the
//! dispatcher drives it against the clipboard, confirmation surface,
//! and storage collaborators.

pub mod clipboard;
pub mod dashboard;
pub mod dispatch;
pub mod surface;

pub use clipboard::{Clipboard, MemoryClipboard, NullClipboard};
pub use dashboard::{
    Dashboard, DashboardCommand, DashboardEffect, PendingDelete, RowView, Visibility,
};
pub use dispatch::Dispatcher;
pub use surface::{blocking_confirm, confirm_with, ConfirmSurface};
