//! Operations over the notification channels collection.

use crate::models::{ChannelConfig, NotificationChannel, NotificationType};

/// Flip the master switch of one channel.
///
/// The per-type selections are not touched, so disabling a channel and
/// re-enabling it restores what was selected before.
pub fn toggle_enabled(
    channels: &[ChannelConfig],
    channel: NotificationChannel,
) -> Vec<ChannelConfig> {
    channels
        .iter()
        .map(|entry| {
            if entry.channel == channel {
                ChannelConfig {
                    enabled: !entry.enabled,
                    ..entry.clone()
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Flip one notification type inside one channel's opt-in map.
pub fn toggle_type(
    channels: &[ChannelConfig],
    channel: NotificationChannel,
    kind: NotificationType,
) -> Vec<ChannelConfig> {
    channels
        .iter()
        .map(|entry| {
            if entry.channel == channel {
                let mut updated = entry.clone();
                if let Some(opt_in) = updated.types.get_mut(&kind) {
                    *opt_in = !*opt_in;
                }
                updated
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Opted-in types vs total for one channel, for the summary line.
///
/// Derived for display only; never stored back into the document.
pub fn enabled_type_count(entry: &ChannelConfig) -> (usize, usize) {
    let active = entry.types.values().filter(|&&v| v).count();
    (active, entry.types.len())
}
