//! Structural checks applied to a document before it is persisted.
//!
//! These guard the document invariants only. Editing-time concerns such as
//! rejecting non-numeric input happen at the screen layer, before a value
//! ever reaches a document.

use thiserror::Error;

use super::enums::{NotificationChannel, NotificationType};
use super::id_card::{expiration_days_in_range, IdCardConfig};
use super::notifications::NotificationsConfig;

/// A structural problem in a settings document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// QR expiration window outside the permitted range.
    #[error("QR expiration must be between 1 and 90 days, got {0}")]
    ExpirationOutOfRange(i32),

    /// An ID-card field id appears more than once.
    #[error("duplicate ID-card field id '{0}'")]
    DuplicateFieldId(String),

    /// A channel entry is missing or duplicated.
    #[error("channel '{0}' must appear exactly once, found {1} entries")]
    ChannelCount(NotificationChannel, usize),

    /// A channel's opt-in map lacks an entry for a notification type.
    #[error("channel '{channel}' has no '{kind}' entry in its types map")]
    MissingTypeOptIn {
        channel: NotificationChannel,
        kind: NotificationType,
    },

    /// A template is missing or duplicated.
    #[error("template for '{0}' must appear exactly once, found {1} entries")]
    TemplateCount(NotificationType, usize),
}

/// Result type for document validation.
pub type DocumentResult = Result<(), DocumentError>;

/// Check an ID-card document before persistence.
///
/// `required` with `visible: false` is accepted here: the editing surface
/// disables the required control for hidden fields, but a document that
/// carries the combination is still well-formed.
pub fn validate_id_card(config: &IdCardConfig) -> DocumentResult {
    for (i, field) in config.fields.iter().enumerate() {
        if config.fields[..i].iter().any(|f| f.id == field.id) {
            return Err(DocumentError::DuplicateFieldId(field.id.clone()));
        }
    }
    if !expiration_days_in_range(config.qr_config.expiration_days) {
        return Err(DocumentError::ExpirationOutOfRange(
            config.qr_config.expiration_days,
        ));
    }
    Ok(())
}

/// Check a notifications document before persistence.
pub fn validate_notifications(config: &NotificationsConfig) -> DocumentResult {
    for &channel in NotificationChannel::all() {
        let count = config.channels.iter().filter(|c| c.channel == channel).count();
        if count != 1 {
            return Err(DocumentError::ChannelCount(channel, count));
        }
    }
    for entry in &config.channels {
        for &kind in NotificationType::all() {
            if !entry.types.contains_key(&kind) {
                return Err(DocumentError::MissingTypeOptIn {
                    channel: entry.channel,
                    kind,
                });
            }
        }
    }
    for &kind in NotificationType::all() {
        let count = config.templates.iter().filter(|t| t.kind == kind).count();
        if count != 1 {
            return Err(DocumentError::TemplateCount(kind, count));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_documents_validate() {
        assert_eq!(validate_id_card(&IdCardConfig::default()), Ok(()));
        assert_eq!(validate_notifications(&NotificationsConfig::default()), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_expiration() {
        let mut config = IdCardConfig::default();
        config.qr_config.expiration_days = 120;
        assert_eq!(
            validate_id_card(&config),
            Err(DocumentError::ExpirationOutOfRange(120))
        );
    }

    #[test]
    fn rejects_duplicate_field_id() {
        let mut config = IdCardConfig::default();
        let dupe = config.fields[0].clone();
        config.fields.push(dupe);
        assert_eq!(
            validate_id_card(&config),
            Err(DocumentError::DuplicateFieldId("1".to_string()))
        );
    }

    #[test]
    fn accepts_required_but_hidden_field() {
        let mut config = IdCardConfig::default();
        config.fields[0].visible = false;
        assert_eq!(validate_id_card(&config), Ok(()));
    }

    #[test]
    fn rejects_missing_channel() {
        let mut config = NotificationsConfig::default();
        config.channels.retain(|c| c.channel != NotificationChannel::Sms);
        assert_eq!(
            validate_notifications(&config),
            Err(DocumentError::ChannelCount(NotificationChannel::Sms, 0))
        );
    }

    #[test]
    fn rejects_incomplete_opt_in_map() {
        let mut config = NotificationsConfig::default();
        config.channels[0].types.remove(&NotificationType::Emergency);
        let err = validate_notifications(&config).unwrap_err();
        assert_eq!(
            err,
            DocumentError::MissingTypeOptIn {
                channel: NotificationChannel::Push,
                kind: NotificationType::Emergency,
            }
        );
    }

    #[test]
    fn rejects_missing_template() {
        let mut config = NotificationsConfig::default();
        config.templates.retain(|t| t.kind != NotificationType::Emergency);
        assert_eq!(
            validate_notifications(&config),
            Err(DocumentError::TemplateCount(NotificationType::Emergency, 0))
        );
    }

    #[test]
    fn errors_display_context() {
        let err = DocumentError::ExpirationOutOfRange(120);
        assert!(err.to_string().contains("between 1 and 90"));
        assert!(err.to_string().contains("120"));

        let err = DocumentError::MissingTypeOptIn {
            channel: NotificationChannel::Email,
            kind: NotificationType::SafetyAlert,
        };
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("safety_alert"));
    }
}
