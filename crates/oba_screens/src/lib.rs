//! Interactive settings screens for OpenBlind Admin.
//!
//! Each screen is a message-driven state machine over the documents in
//! [`oba_core`]: a loader seeds the working copy, editors rewrite it, and
//! an updater tracks save state with transient success feedback. No
//! rendering lives here; an embedder feeds input messages in and executes
//! the commands handed back.

pub mod loader;
pub mod screens;
pub mod tasks;
pub mod updater;
