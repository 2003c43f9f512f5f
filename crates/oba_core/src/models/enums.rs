//! Closed enums for notification channels and types.

use serde::{Deserialize, Serialize};

/// Delivery mechanism for user notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Push,
    Email,
    Sms,
}

impl NotificationChannel {
    /// Wire name used inside the stored documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }

    /// Display name shown on the admin screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Push => "Push Notifications",
            Self::Email => "Email",
            Self::Sms => "SMS",
        }
    }

    /// Get all channels, in display order.
    pub fn all() -> &'static [NotificationChannel] {
        &[Self::Push, Self::Email, Self::Sms]
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Category of event that can trigger a notification.
///
/// The set is closed: every channel's opt-in map and the template set
/// carry exactly one entry per variant, so adding a variant is a
/// compile-checked change across all of those tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    RouteStart,
    RouteEnd,
    SafetyAlert,
    SupportMessage,
    Emergency,
}

impl NotificationType {
    /// Wire name used inside the stored documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RouteStart => "route_start",
            Self::RouteEnd => "route_end",
            Self::SafetyAlert => "safety_alert",
            Self::SupportMessage => "support_message",
            Self::Emergency => "emergency",
        }
    }

    /// Display name shown on the admin screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RouteStart => "Inicio de Ruta",
            Self::RouteEnd => "Fin de Ruta",
            Self::SafetyAlert => "Alerta de Seguridad",
            Self::SupportMessage => "Mensaje de Soporte",
            Self::Emergency => "Emergencia",
        }
    }

    /// Get all notification types, in display order.
    pub fn all() -> &'static [NotificationType] {
        &[
            Self::RouteStart,
            Self::RouteEnd,
            Self::SafetyAlert,
            Self::SupportMessage,
            Self::Emergency,
        ]
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
