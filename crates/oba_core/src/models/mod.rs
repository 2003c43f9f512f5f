//! Data models for the OpenBlind admin settings.
//!
//! This module contains the two settings documents and their parts:
//! - Closed enums for notification channels and types
//! - The ID-card document (card fields plus QR options)
//! - The notifications document (channels, templates, legal text)
//! - Structural validation applied before persistence

mod enums;
mod id_card;
mod notifications;
mod validation;

// Re-export all public types
pub use enums::{NotificationChannel, NotificationType};
pub use id_card::{
    expiration_days_in_range, IdCardConfig, IdCardField, QrConfig, QrFlag, EXPIRATION_DAYS_MAX,
    EXPIRATION_DAYS_MIN,
};
pub use notifications::{ChannelConfig, MessageTemplate, NotificationsConfig, TemplateField};
pub use validation::{validate_id_card, validate_notifications, DocumentError, DocumentResult};
