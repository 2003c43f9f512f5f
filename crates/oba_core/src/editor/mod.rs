//! Pure editing operations over the settings documents.
//!
//! Every operation takes the current value by reference and returns a new
//! one; nothing here mutates in place or talks to the store. Screens apply
//! the result to their working copy, so each edit replaces the whole
//! document rather than patching part of it.

pub mod channels;
pub mod fields;
pub mod qr;
pub mod templates;
