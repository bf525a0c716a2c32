// src/session/surface.rs
//! Confirmation and notice surface boundary
//!
//! When the embedding UI cannot build its confirmation dialog the
//! dispatcher falls back to the synchronous prompt below; skipping
//! confirmation on a destructive action is never an option.

use std::io::{self, BufRead, Write};

use crate::error::CoreError;

pub trait ConfirmSurface {
    /// Present a confirmation naming the exact label; true means confirmed
    fn confirm_delete(&mut self, label: &str) -> Result<bool, CoreError>;

    /// Manual-selection fallback for the copy action
    fn manual_copy(&mut self, secret: &str) -> Result<(), CoreError>;

    /// Direct, visible notice to the operator
    fn notify(&mut self, message: &str);
}

/// Synchronous yes/no prompt over arbitrary reader/writer pairs
pub fn confirm_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    label: &str,
) -> io::Result<bool> {
    write!(output, "Delete the stored credential for \"{label}\"? [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Stdin/stderr fallback used when no confirmation surface exists
pub fn blocking_confirm(label: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_with(stdin.lock(), io::stderr(), label)
}
