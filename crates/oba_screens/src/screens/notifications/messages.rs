//! Notifications screen messages (events) and commands

use std::time::Duration;

use oba_core::models::{
    NotificationChannel, NotificationType, NotificationsConfig, TemplateField,
};
use oba_core::store::{AdminSettings, StoreResult};

/// Messages for the notifications screen.
#[derive(Debug)]
pub enum NotificationsMsg {
    // === Lifecycle ===
    /// Re-run the settings fetch (entry point and explicit retry).
    Reload,
    /// The fetch settled.
    Fetched(StoreResult<AdminSettings>),

    // === Channels ===
    ToggleChannelEnabled(NotificationChannel),
    ToggleType {
        channel: NotificationChannel,
        kind: NotificationType,
    },

    // === Templates ===
    /// Expand one template for editing; collapses it if already expanded.
    ToggleEditing(NotificationType),
    SetTemplateField {
        kind: NotificationType,
        field: TemplateField,
        value: String,
    },
    InsertVariable {
        kind: NotificationType,
        variable: String,
    },
    SetLegalText(String),

    // === Actions ===
    Save,
    /// The save settled.
    SaveSettled(StoreResult<()>),
    /// The auto-clear timer for the save identified by `token` fired.
    ClearSaved { token: u64 },
    Reset,
}

/// Asynchronous work requested by the screen.
#[derive(Debug)]
pub enum NotificationsCmd {
    /// Fetch both documents from the store.
    Fetch,
    /// Persist the given working copy.
    Push(NotificationsConfig),
    /// Produce `ClearSaved { token }` after `delay`.
    ScheduleClear { token: u64, delay: Duration },
}
