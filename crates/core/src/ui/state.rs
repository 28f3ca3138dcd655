//! UI state types shared with the caller.

use std::path::PathBuf;

/// What the editing session produced, reported back to the caller once the
/// window closes.
#[derive(Clone, Default)]
pub struct SessionOutcome {
    /// Where the edited image was last saved, if the user saved at all.
    pub saved_to: Option<PathBuf>,
    /// Number of destructive edits accepted over the whole session,
    /// including ones later undone.
    pub edits_applied: usize,
}

/// The one-line feedback strip at the bottom of the editor window.
///
/// Declined operations (nothing selected, nothing to undo) land here as
/// recoverable notices rather than terminating the session.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusLine {
    /// No message pending.
    Ready,
    /// An operation succeeded and is worth mentioning.
    Info(String),
    /// An operation was declined or failed.
    Error(String),
}

impl StatusLine {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }
}
