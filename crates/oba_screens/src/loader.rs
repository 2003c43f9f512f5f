//! Loading state for the initial settings fetch.

/// Phase of the settings fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Both documents arrived.
    Ready,
    /// Fetch failed; the error message is kept for display.
    Failed,
}

/// Tracks the fetch lifecycle for one screen.
///
/// The fetched documents live on the screen model; this only carries the
/// phase and the last error message. A reload may be requested from any
/// phase, including `Ready`.
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    phase: LoadPhase,
    error: Option<String>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading`, clearing any previous error.
    pub fn begin(&mut self) {
        self.phase = LoadPhase::Loading;
        self.error = None;
    }

    /// Record a successful fetch.
    pub fn finish_ok(&mut self) {
        self.phase = LoadPhase::Ready;
        self.error = None;
    }

    /// Record a failed fetch.
    pub fn finish_err(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed;
        self.error = Some(message.into());
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// True once documents have arrived.
    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Message from the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
