//! Notifications screen state model

use std::time::Duration;

use oba_core::models::{NotificationType, NotificationsConfig};

use crate::loader::SettingsLoader;
use crate::updater::{ConfigUpdater, SUCCESS_CLEAR_DELAY};

/// Notifications screen state - fetch/save machinery, the document copies
/// and the per-screen view state.
#[derive(Debug, Clone)]
pub struct NotificationsModel {
    pub loader: SettingsLoader,
    pub updater: ConfigUpdater,
    /// Last copy confirmed persisted (initial load or successful save).
    pub saved: Option<NotificationsConfig>,
    /// Copy being edited. `None` until the first successful fetch.
    pub working: Option<NotificationsConfig>,
    /// Track if the working copy has been edited since seed/save/reset.
    pub modified: bool,
    /// Which template is expanded for editing, at most one per screen.
    /// Presentation state only: reset and save do not touch it.
    pub editing: Option<NotificationType>,
    /// How long the success flag stays visible.
    pub clear_delay: Duration,
}

impl NotificationsModel {
    pub fn new() -> Self {
        Self {
            loader: SettingsLoader::new(),
            updater: ConfigUpdater::new(),
            saved: None,
            working: None,
            modified: false,
            editing: None,
            clear_delay: SUCCESS_CLEAR_DELAY,
        }
    }

    /// Seed both copies from a fetched document.
    pub fn seed(&mut self, config: NotificationsConfig) {
        self.saved = Some(config.clone());
        self.working = Some(config);
        self.modified = false;
    }

    /// Replace the working copy with an edited document.
    pub fn apply_edit(&mut self, config: NotificationsConfig) {
        self.working = Some(config);
        self.modified = true;
    }

    /// Discard edits, restoring the working copy from the saved copy.
    pub fn reset(&mut self) {
        self.working = self.saved.clone();
        self.modified = false;
    }

    /// Promote the working copy to the new saved baseline.
    pub fn mark_saved(&mut self) {
        self.saved = self.working.clone();
        self.modified = false;
    }

    /// Expand `kind` for editing, collapsing it if already expanded.
    pub fn toggle_editing(&mut self, kind: NotificationType) {
        self.editing = if self.editing == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }
}

impl Default for NotificationsModel {
    fn default() -> Self {
        Self::new()
    }
}
