//! ID-card screen messages (events) and commands

use std::time::Duration;

use oba_core::models::{IdCardConfig, QrFlag};
use oba_core::store::{AdminSettings, StoreResult};

/// Messages for the ID-card screen.
#[derive(Debug)]
pub enum IdCardMsg {
    // === Lifecycle ===
    /// Re-run the settings fetch (entry point and explicit retry).
    Reload,
    /// The fetch settled.
    Fetched(StoreResult<AdminSettings>),

    // === Card fields ===
    ToggleRequired(String),
    ToggleVisible(String),
    /// Raw text from the order input of one field.
    SetOrderInput { id: String, value: String },

    // === QR code ===
    ToggleQrFlag(QrFlag),
    /// Raw text from the expiration input.
    SetExpirationInput(String),

    // === Actions ===
    Save,
    /// The save settled.
    SaveSettled(StoreResult<()>),
    /// The auto-clear timer for the save identified by `token` fired.
    ClearSaved { token: u64 },
    Reset,
}

/// Asynchronous work requested by the screen.
///
/// The embedder runs each command through
/// [`run_command`](super::run_command) and feeds the resulting message
/// back into the screen.
#[derive(Debug)]
pub enum IdCardCmd {
    /// Fetch both documents from the store.
    Fetch,
    /// Persist the given working copy.
    Push(IdCardConfig),
    /// Produce `ClearSaved { token }` after `delay`.
    ScheduleClear { token: u64, delay: Duration },
}
