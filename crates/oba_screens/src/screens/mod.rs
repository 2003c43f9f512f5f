//! Message-driven screen controllers.
//!
//! Both screens follow the same shape: a model holding the working and
//! saved document copies, a message enum for user input and settled
//! asynchronous work, an `update` that applies one message and may hand
//! back a command, and a free `run_command` that executes commands
//! against the store.

pub mod id_card;
pub mod notifications;
