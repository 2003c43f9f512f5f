//! OBA Core - Backend logic for OpenBlind Admin
//!
//! This crate contains the settings documents, the pure editing operations
//! over them and the store seam, with zero UI dependencies. It can be used
//! by the interactive screens or a CLI tool.

pub mod editor;
pub mod logging;
pub mod models;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
