//! Save state with transient success feedback.

use std::time::Duration;

/// How long the success flag stays visible before auto-clearing.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Phase of the current save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePhase {
    #[default]
    Idle,
    /// A save is in flight; further submissions are refused.
    Saving,
    /// The last save succeeded; cleared again after [`SUCCESS_CLEAR_DELAY`].
    Saved,
    /// The last save failed; the message stays until the next attempt.
    Failed,
}

/// Tracks save submissions for one screen.
///
/// Every success is numbered, and the scheduled auto-clear must present
/// that number back. A clear whose number no longer matches belongs to a
/// timer that was superseded by a newer save and is ignored.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdater {
    phase: SavePhase,
    error: Option<String>,
    token: u64,
}

impl ConfigUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a save attempt.
    ///
    /// Returns false while another save is in flight; otherwise the
    /// previous outcome is cleared and the phase becomes `Saving`.
    pub fn begin(&mut self) -> bool {
        if self.phase == SavePhase::Saving {
            return false;
        }
        self.phase = SavePhase::Saving;
        self.error = None;
        true
    }

    /// Record a successful save, returning the token identifying it.
    pub fn finish_ok(&mut self) -> u64 {
        self.phase = SavePhase::Saved;
        self.token += 1;
        self.token
    }

    /// Record a failed save.
    pub fn finish_err(&mut self, message: impl Into<String>) {
        self.phase = SavePhase::Failed;
        self.error = Some(message.into());
    }

    /// Clear the success flag if `token` still identifies the current
    /// success. Returns whether the flag was cleared.
    pub fn dismiss(&mut self, token: u64) -> bool {
        if self.phase == SavePhase::Saved && self.token == token {
            self.phase = SavePhase::Idle;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> SavePhase {
        self.phase
    }

    /// True while a save is in flight.
    pub fn is_saving(&self) -> bool {
        self.phase == SavePhase::Saving
    }

    /// True while the success flag is showing.
    pub fn succeeded(&self) -> bool {
        self.phase == SavePhase::Saved
    }

    /// Message from the last failed save.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
