//! Notifications configuration screen.
//!
//! Owns the working and saved copies of the notifications document plus
//! the template editing focus. Channel switches, per-type opt-ins, the
//! templates and the legal text all edit the same working copy, which is
//! saved wholesale.

mod logic;
mod messages;
mod model;

pub use logic::{channel_rows, type_rows};
pub use messages::{NotificationsCmd, NotificationsMsg};
pub use model::NotificationsModel;

use std::sync::Arc;
use std::time::Duration;

use oba_core::editor::{channels, templates};
use oba_core::models::NotificationsConfig;
use oba_core::store::SettingsStore;

/// Notifications screen controller.
pub struct NotificationsScreen {
    store: Arc<dyn SettingsStore>,
    pub model: NotificationsModel,
}

impl NotificationsScreen {
    /// Create the screen and request the initial fetch.
    pub fn new(store: Arc<dyn SettingsStore>) -> (Self, NotificationsCmd) {
        let mut screen = Self {
            store,
            model: NotificationsModel::new(),
        };
        screen.model.loader.begin();
        tracing::debug!("notifications screen mounted, fetching settings");
        (screen, NotificationsCmd::Fetch)
    }

    /// Shorten the success auto-clear delay.
    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.model.clear_delay = delay;
        self
    }

    /// Store handle for executing this screen's commands.
    pub fn store(&self) -> Arc<dyn SettingsStore> {
        Arc::clone(&self.store)
    }

    /// Apply one message, returning follow-up work if any.
    pub fn update(&mut self, message: NotificationsMsg) -> Option<NotificationsCmd> {
        match message {
            NotificationsMsg::Reload => {
                self.model.loader.begin();
                Some(NotificationsCmd::Fetch)
            }
            NotificationsMsg::Fetched(Ok(settings)) => {
                self.model.loader.finish_ok();
                self.model.seed(settings.notifications);
                None
            }
            NotificationsMsg::Fetched(Err(err)) => {
                tracing::warn!("settings fetch failed: {err}");
                self.model.loader.finish_err(err.to_string());
                None
            }

            NotificationsMsg::ToggleChannelEnabled(channel) => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(NotificationsConfig {
                        channels: channels::toggle_enabled(&working.channels, channel),
                        ..working
                    });
                }
                None
            }
            NotificationsMsg::ToggleType { channel, kind } => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(NotificationsConfig {
                        channels: channels::toggle_type(&working.channels, channel, kind),
                        ..working
                    });
                }
                None
            }

            NotificationsMsg::ToggleEditing(kind) => {
                // View state only; the documents stay as they are.
                self.model.toggle_editing(kind);
                None
            }
            NotificationsMsg::SetTemplateField { kind, field, value } => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(NotificationsConfig {
                        templates: templates::set_field(&working.templates, kind, field, value),
                        ..working
                    });
                }
                None
            }
            NotificationsMsg::InsertVariable { kind, variable } => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(NotificationsConfig {
                        templates: templates::insert_variable(&working.templates, kind, &variable),
                        ..working
                    });
                }
                None
            }
            NotificationsMsg::SetLegalText(value) => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(templates::set_legal_text(&working, value));
                }
                None
            }

            NotificationsMsg::Save => {
                let working = self.model.working.clone()?;
                if !self.model.updater.begin() {
                    tracing::debug!("notifications save already in flight, ignoring");
                    return None;
                }
                tracing::info!("saving notifications settings");
                Some(NotificationsCmd::Push(working))
            }
            NotificationsMsg::SaveSettled(Ok(())) => {
                let token = self.model.updater.finish_ok();
                self.model.mark_saved();
                tracing::info!("notifications settings saved");
                Some(NotificationsCmd::ScheduleClear {
                    token,
                    delay: self.model.clear_delay,
                })
            }
            NotificationsMsg::SaveSettled(Err(err)) => {
                tracing::warn!("notifications save failed: {err}");
                self.model.updater.finish_err(err.to_string());
                None
            }
            NotificationsMsg::ClearSaved { token } => {
                self.model.updater.dismiss(token);
                None
            }
            NotificationsMsg::Reset => {
                self.model.reset();
                None
            }
        }
    }
}

/// Execute one command against the store, yielding the follow-up message.
pub async fn run_command(
    store: Arc<dyn SettingsStore>,
    cmd: NotificationsCmd,
) -> NotificationsMsg {
    match cmd {
        NotificationsCmd::Fetch => NotificationsMsg::Fetched(store.fetch_settings().await),
        NotificationsCmd::Push(config) => {
            NotificationsMsg::SaveSettled(store.save_notifications(config).await)
        }
        NotificationsCmd::ScheduleClear { token, delay } => {
            tokio::time::sleep(delay).await;
            NotificationsMsg::ClearSaved { token }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::updater::SavePhase;
    use oba_core::models::{IdCardConfig, NotificationChannel, NotificationType, TemplateField};
    use oba_core::store::{AdminSettings, DocumentKind, MemoryStore, StoreError, StoreResult};

    /// Store whose saves always fail; fetches serve the defaults.
    struct FailingSaves;

    #[async_trait]
    impl SettingsStore for FailingSaves {
        async fn fetch_settings(&self) -> StoreResult<AdminSettings> {
            Ok(AdminSettings::default())
        }
        async fn save_id_card(&self, _config: IdCardConfig) -> StoreResult<()> {
            Err(StoreError::save_failed(DocumentKind::IdCard, "store unreachable"))
        }
        async fn save_notifications(&self, _config: NotificationsConfig) -> StoreResult<()> {
            Err(StoreError::save_failed(DocumentKind::Notifications, "store unreachable"))
        }
    }

    async fn mounted(store: Arc<dyn SettingsStore>) -> NotificationsScreen {
        let (mut screen, cmd) = NotificationsScreen::new(store);
        let msg = run_command(screen.store(), cmd).await;
        screen.update(msg);
        screen
    }

    fn working(screen: &NotificationsScreen) -> &NotificationsConfig {
        screen.model.working.as_ref().unwrap()
    }

    #[tokio::test]
    async fn mount_seeds_both_copies() {
        let screen = mounted(Arc::new(MemoryStore::new())).await;

        assert!(screen.model.loader.is_ready());
        assert_eq!(screen.model.working, screen.model.saved);
        assert_eq!(working(&screen).channels.len(), 3);
        assert_eq!(working(&screen).templates.len(), 5);
    }

    #[tokio::test]
    async fn enabling_sms_keeps_its_selections() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;
        let before = working(&screen)
            .channel(NotificationChannel::Sms)
            .unwrap()
            .types
            .clone();

        screen.update(NotificationsMsg::ToggleChannelEnabled(NotificationChannel::Sms));

        let sms = working(&screen).channel(NotificationChannel::Sms).unwrap();
        assert!(sms.enabled);
        assert_eq!(sms.types, before);
        assert!(screen.model.modified);
    }

    #[tokio::test]
    async fn toggling_a_type_marks_the_copy_modified() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(NotificationsMsg::ToggleType {
            channel: NotificationChannel::Email,
            kind: NotificationType::RouteEnd,
        });

        let email = working(&screen).channel(NotificationChannel::Email).unwrap();
        assert!(email.types[&NotificationType::RouteEnd]);
        assert!(screen.model.modified);
    }

    #[tokio::test]
    async fn editing_focus_expands_and_collapses() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(NotificationsMsg::ToggleEditing(NotificationType::RouteStart));
        assert_eq!(screen.model.editing, Some(NotificationType::RouteStart));

        // A second toggle on the same template collapses it.
        screen.update(NotificationsMsg::ToggleEditing(NotificationType::RouteStart));
        assert_eq!(screen.model.editing, None);

        screen.update(NotificationsMsg::ToggleEditing(NotificationType::RouteStart));
        screen.update(NotificationsMsg::ToggleEditing(NotificationType::Emergency));
        assert_eq!(screen.model.editing, Some(NotificationType::Emergency));
    }

    #[tokio::test]
    async fn editing_focus_is_not_a_document_edit() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(NotificationsMsg::ToggleEditing(NotificationType::Emergency));

        assert!(!screen.model.modified);
        assert_eq!(screen.model.working, screen.model.saved);
    }

    #[tokio::test]
    async fn editing_focus_survives_a_reset() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(NotificationsMsg::ToggleEditing(NotificationType::SafetyAlert));
        screen.update(NotificationsMsg::SetLegalText("borrador".to_string()));
        screen.update(NotificationsMsg::Reset);

        assert_eq!(screen.model.working, screen.model.saved);
        assert_eq!(screen.model.editing, Some(NotificationType::SafetyAlert));
    }

    #[tokio::test]
    async fn template_edits_build_the_expected_body() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(NotificationsMsg::SetTemplateField {
            kind: NotificationType::RouteStart,
            field: TemplateField::Body,
            value: "Hola".to_string(),
        });
        screen.update(NotificationsMsg::InsertVariable {
            kind: NotificationType::RouteStart,
            variable: "userName".to_string(),
        });

        let template = working(&screen).template(NotificationType::RouteStart).unwrap();
        assert_eq!(template.body, "Hola {{userName}}");
    }

    #[tokio::test]
    async fn save_round_trip_promotes_and_auto_clears() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;
        screen = screen.with_clear_delay(Duration::from_millis(20));

        screen.update(NotificationsMsg::SetLegalText("Aviso actualizado.".to_string()));
        let cmd = screen.update(NotificationsMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let clear = screen.update(msg);

        assert!(screen.model.updater.succeeded());
        assert_eq!(screen.model.working, screen.model.saved);

        let msg = run_command(screen.store(), clear.unwrap()).await;
        screen.update(msg);
        assert_eq!(screen.model.updater.phase(), SavePhase::Idle);
    }

    #[tokio::test]
    async fn failed_save_keeps_edits_and_the_error() {
        let mut screen = mounted(Arc::new(FailingSaves)).await;

        screen.update(NotificationsMsg::ToggleChannelEnabled(NotificationChannel::Sms));
        let edited = screen.model.working.clone();

        let cmd = screen.update(NotificationsMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let followup = screen.update(msg);

        assert!(followup.is_none());
        assert_eq!(screen.model.updater.phase(), SavePhase::Failed);
        assert!(screen.model.updater.error().unwrap().contains("store unreachable"));
        assert_eq!(screen.model.working, edited);
        assert_ne!(screen.model.working, screen.model.saved);
    }
}
