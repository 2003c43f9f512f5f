//! Screen-scoped background tasks.

use tokio::task::JoinHandle;

/// Holds at most one spawned task, aborting it when replaced or dropped.
///
/// Screens use this for the success auto-clear timer: scheduling a new
/// clear cancels the previous one, and tearing the screen down cancels
/// whatever is still pending so a stale timer never fires into a screen
/// that no longer exists.
#[derive(Debug, Default)]
pub struct OneShotTask {
    handle: Option<JoinHandle<()>>,
}

impl OneShotTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `handle`, aborting the previously held task.
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// Abort the held task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while a task is held. The task may have already finished on
    /// its own; this only reports that one was scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for OneShotTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
