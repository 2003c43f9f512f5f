//! ID-card screen state model

use std::time::Duration;

use oba_core::models::IdCardConfig;

use crate::loader::SettingsLoader;
use crate::updater::{ConfigUpdater, SUCCESS_CLEAR_DELAY};

/// ID-card screen state - fetch/save machinery plus the document copies.
#[derive(Debug, Clone)]
pub struct IdCardModel {
    pub loader: SettingsLoader,
    pub updater: ConfigUpdater,
    /// Last copy confirmed persisted (initial load or successful save).
    pub saved: Option<IdCardConfig>,
    /// Copy being edited. `None` until the first successful fetch.
    pub working: Option<IdCardConfig>,
    /// Track if the working copy has been edited since seed/save/reset.
    pub modified: bool,
    /// Message from the last rejected numeric input.
    pub input_error: Option<String>,
    /// How long the success flag stays visible.
    pub clear_delay: Duration,
}

impl IdCardModel {
    pub fn new() -> Self {
        Self {
            loader: SettingsLoader::new(),
            updater: ConfigUpdater::new(),
            saved: None,
            working: None,
            modified: false,
            input_error: None,
            clear_delay: SUCCESS_CLEAR_DELAY,
        }
    }

    /// Seed both copies from a fetched document.
    pub fn seed(&mut self, config: IdCardConfig) {
        self.saved = Some(config.clone());
        self.working = Some(config);
        self.modified = false;
        self.input_error = None;
    }

    /// Replace the working copy with an edited document.
    pub fn apply_edit(&mut self, config: IdCardConfig) {
        self.working = Some(config);
        self.modified = true;
        self.input_error = None;
    }

    /// Discard edits, restoring the working copy from the saved copy.
    ///
    /// The saved copy moves forward on every successful save, so a reset
    /// after saving reverts to that save point, not to the initial load.
    pub fn reset(&mut self) {
        self.working = self.saved.clone();
        self.modified = false;
        self.input_error = None;
    }

    /// Promote the working copy to the new saved baseline.
    pub fn mark_saved(&mut self) {
        self.saved = self.working.clone();
        self.modified = false;
    }
}

impl Default for IdCardModel {
    fn default() -> Self {
        Self::new()
    }
}
