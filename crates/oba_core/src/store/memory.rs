//! In-memory settings store used by tests and the demo driver.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::models::{validate_id_card, validate_notifications, IdCardConfig, NotificationsConfig};

use super::{AdminSettings, DocumentKind, SettingsStore, StoreError, StoreResult};

/// Seeded in-memory backend with optional artificial latency.
///
/// Documents are replaced wholesale under a mutex, so a save is atomic:
/// readers observe either the previous document or the new one, never a
/// mix. Validation runs before the swap, so a rejected save leaves the
/// stored document untouched.
#[derive(Debug)]
pub struct MemoryStore {
    settings: Mutex<AdminSettings>,
    fetch_latency: Duration,
    save_latency: Duration,
}

impl MemoryStore {
    /// Create a store seeded with the default documents, without latency.
    pub fn new() -> Self {
        Self::with_settings(AdminSettings::default())
    }

    /// Create a store holding explicit initial documents.
    pub fn with_settings(settings: AdminSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
            fetch_latency: Duration::ZERO,
            save_latency: Duration::ZERO,
        }
    }

    /// Simulate a slow backend.
    pub fn with_latency(mut self, fetch: Duration, save: Duration) -> Self {
        self.fetch_latency = fetch;
        self.save_latency = save;
        self
    }

    /// Snapshot of the currently stored documents.
    pub fn current(&self) -> AdminSettings {
        self.settings.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn fetch_settings(&self) -> StoreResult<AdminSettings> {
        if !self.fetch_latency.is_zero() {
            tokio::time::sleep(self.fetch_latency).await;
        }
        let settings = self.settings.lock().unwrap().clone();
        tracing::debug!("served settings snapshot");
        Ok(settings)
    }

    async fn save_id_card(&self, config: IdCardConfig) -> StoreResult<()> {
        if !self.save_latency.is_zero() {
            tokio::time::sleep(self.save_latency).await;
        }
        validate_id_card(&config)
            .map_err(|e| StoreError::invalid_document(DocumentKind::IdCard, e))?;

        let mut settings = self.settings.lock().unwrap();
        settings.id_card = config;
        tracing::info!(
            fields = settings.id_card.fields.len(),
            expiration_days = settings.id_card.qr_config.expiration_days,
            "id-card settings updated"
        );
        if let Ok(json) = serde_json::to_string(&settings.id_card) {
            tracing::debug!(document = %json, "stored id-card document");
        }
        Ok(())
    }

    async fn save_notifications(&self, config: NotificationsConfig) -> StoreResult<()> {
        if !self.save_latency.is_zero() {
            tokio::time::sleep(self.save_latency).await;
        }
        validate_notifications(&config)
            .map_err(|e| StoreError::invalid_document(DocumentKind::Notifications, e))?;

        let mut settings = self.settings.lock().unwrap();
        settings.notifications = config;
        tracing::info!(
            channels = settings.notifications.channels.len(),
            templates = settings.notifications.templates.len(),
            "notifications settings updated"
        );
        if let Ok(json) = serde_json::to_string(&settings.notifications) {
            tracing::debug!(document = %json, "stored notifications document");
        }
        Ok(())
    }
}
