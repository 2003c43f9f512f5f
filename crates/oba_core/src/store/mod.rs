//! Settings persistence seam.
//!
//! Screens talk to a [`SettingsStore`] trait object; the shipped
//! implementation is the in-memory [`MemoryStore`]. A real deployment puts
//! a remote API behind the same trait, which is why every call returns a
//! displayable failure reason instead of panicking.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DocumentError, IdCardConfig, NotificationsConfig};

/// Both settings documents, as served by a single fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub id_card: IdCardConfig,
    pub notifications: NotificationsConfig,
}

/// Which settings document an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    IdCard,
    Notifications,
}

impl DocumentKind {
    /// Name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdCard => "id-card",
            Self::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error from a settings store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The settings fetch failed.
    #[error("failed to fetch settings: {reason}")]
    FetchFailed { reason: String },

    /// A document save was rejected or lost.
    #[error("failed to save {document} settings: {reason}")]
    SaveFailed {
        document: DocumentKind,
        reason: String,
    },

    /// The submitted document is structurally invalid.
    #[error("invalid {document} settings: {source}")]
    InvalidDocument {
        document: DocumentKind,
        #[source]
        source: DocumentError,
    },
}

impl StoreError {
    /// Create a fetch failure.
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }

    /// Create a save failure.
    pub fn save_failed(document: DocumentKind, reason: impl Into<String>) -> Self {
        Self::SaveFailed {
            document,
            reason: reason.into(),
        }
    }

    /// Create an invalid document error.
    pub fn invalid_document(document: DocumentKind, source: DocumentError) -> Self {
        Self::InvalidDocument { document, source }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence backend for the two settings documents.
///
/// Saves replace a whole document; there is no partial update endpoint.
/// Each call either fully succeeds or fails without leaving a half-written
/// document behind.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch both documents.
    async fn fetch_settings(&self) -> StoreResult<AdminSettings>;

    /// Replace the ID-card document.
    async fn save_id_card(&self, config: IdCardConfig) -> StoreResult<()>;

    /// Replace the notifications document.
    async fn save_notifications(&self, config: NotificationsConfig) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationType;

    #[test]
    fn store_error_displays_document_name() {
        let err = StoreError::save_failed(DocumentKind::IdCard, "connection refused");
        let msg = err.to_string();
        assert!(msg.contains("id-card"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn invalid_document_chains_the_cause() {
        let err = StoreError::invalid_document(
            DocumentKind::Notifications,
            DocumentError::TemplateCount(NotificationType::Emergency, 0),
        );
        let msg = err.to_string();
        assert!(msg.contains("notifications"));
        assert!(msg.contains("emergency"));

        use std::error::Error as _;
        assert!(err.source().is_some());
    }

    #[test]
    fn admin_settings_serializes_both_documents() {
        let json = serde_json::to_value(AdminSettings::default()).unwrap();
        assert!(json.get("idCard").is_some());
        assert!(json.get("notifications").is_some());
    }
}
