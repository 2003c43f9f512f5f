//! Notifications screen UI logic helpers

use oba_core::models::{NotificationChannel, NotificationType};

/// Display rows for the channel list, in render order.
pub fn channel_rows() -> Vec<(&'static str, NotificationChannel)> {
    NotificationChannel::all()
        .iter()
        .map(|&channel| (channel.label(), channel))
        .collect()
}

/// Display rows for a channel's per-type switches, in render order.
pub fn type_rows() -> Vec<(&'static str, NotificationType)> {
    NotificationType::all()
        .iter()
        .map(|&kind| (kind.label(), kind))
        .collect()
}
