//! ID-card configuration screen.
//!
//! Owns the working and saved copies of the ID-card document and drives
//! the fetch/save lifecycle. The embedder forwards user input as
//! [`IdCardMsg`], executes every returned [`IdCardCmd`] through
//! [`run_command`] and feeds the produced message back in.

mod logic;
mod messages;
mod model;

pub use messages::{IdCardCmd, IdCardMsg};
pub use model::IdCardModel;

use std::sync::Arc;
use std::time::Duration;

use oba_core::editor::{fields, qr};
use oba_core::models::IdCardConfig;
use oba_core::store::SettingsStore;

use logic::{parse_expiration, parse_order};

/// ID-card screen controller.
pub struct IdCardScreen {
    store: Arc<dyn SettingsStore>,
    pub model: IdCardModel,
}

impl IdCardScreen {
    /// Create the screen and request the initial fetch.
    ///
    /// The returned command must be executed for the screen to leave the
    /// loading state.
    pub fn new(store: Arc<dyn SettingsStore>) -> (Self, IdCardCmd) {
        let mut screen = Self {
            store,
            model: IdCardModel::new(),
        };
        screen.model.loader.begin();
        tracing::debug!("id-card screen mounted, fetching settings");
        (screen, IdCardCmd::Fetch)
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
    pub fn update(&mut self, message: IdCardMsg) -> Option<IdCardCmd> {
        match message {
            IdCardMsg::Reload => {
                self.model.loader.begin();
                Some(IdCardCmd::Fetch)
            }
            IdCardMsg::Fetched(Ok(settings)) => {
                self.model.loader.finish_ok();
                self.model.seed(settings.id_card);
                None
            }
            IdCardMsg::Fetched(Err(err)) => {
                tracing::warn!("settings fetch failed: {err}");
                self.model.loader.finish_err(err.to_string());
                None
            }

            IdCardMsg::ToggleRequired(id) => {
                if let Some(working) = self.model.working.clone() {
                    // The required control is disabled while a field is
                    // hidden, so such toggles are refused here as well.
                    if working.field(&id).is_some_and(|f| f.visible) {
                        self.model.apply_edit(IdCardConfig {
                            fields: fields::toggle_required(&working.fields, &id),
                            ..working
                        });
                    }
                }
                None
            }
            IdCardMsg::ToggleVisible(id) => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(IdCardConfig {
                        fields: fields::toggle_visible(&working.fields, &id),
                        ..working
                    });
                }
                None
            }
            IdCardMsg::SetOrderInput { id, value } => {
                if let Some(working) = self.model.working.clone() {
                    match parse_order(&value) {
                        Ok(order) => self.model.apply_edit(IdCardConfig {
                            fields: fields::set_order(&working.fields, &id, order),
                            ..working
                        }),
                        Err(message) => {
                            tracing::debug!(field = %id, "rejected order input: {message}");
                            self.model.input_error = Some(message);
                        }
                    }
                }
                None
            }

            IdCardMsg::ToggleQrFlag(flag) => {
                if let Some(working) = self.model.working.clone() {
                    self.model.apply_edit(IdCardConfig {
                        qr_config: qr::toggle_flag(&working.qr_config, flag),
                        ..working
                    });
                }
                None
            }
            IdCardMsg::SetExpirationInput(value) => {
                if let Some(working) = self.model.working.clone() {
                    match parse_expiration(&value) {
                        Ok(days) => self.model.apply_edit(IdCardConfig {
                            qr_config: qr::set_expiration_days(&working.qr_config, days),
                            ..working
                        }),
                        Err(message) => {
                            tracing::debug!("rejected expiration input: {message}");
                            self.model.input_error = Some(message);
                        }
                    }
                }
                None
            }

            IdCardMsg::Save => {
                let working = self.model.working.clone()?;
                if !self.model.updater.begin() {
                    tracing::debug!("id-card save already in flight, ignoring");
                    return None;
                }
                tracing::info!("saving id-card settings");
                Some(IdCardCmd::Push(working))
            }
            IdCardMsg::SaveSettled(Ok(())) => {
                let token = self.model.updater.finish_ok();
                self.model.mark_saved();
                tracing::info!("id-card settings saved");
                Some(IdCardCmd::ScheduleClear {
                    token,
                    delay: self.model.clear_delay,
                })
            }
            IdCardMsg::SaveSettled(Err(err)) => {
                tracing::warn!("id-card save failed: {err}");
                self.model.updater.finish_err(err.to_string());
                None
            }
            IdCardMsg::ClearSaved { token } => {
                self.model.updater.dismiss(token);
                None
            }
            IdCardMsg::Reset => {
                self.model.reset();
                None
            }
        }
    }
}

/// Execute one command against the store, yielding the follow-up message.
///
/// Takes a store handle instead of borrowing the screen so the embedder
/// can spawn it; a message produced after the screen is gone is simply
/// never delivered.
pub async fn run_command(store: Arc<dyn SettingsStore>, cmd: IdCardCmd) -> IdCardMsg {
    match cmd {
        IdCardCmd::Fetch => IdCardMsg::Fetched(store.fetch_settings().await),
        IdCardCmd::Push(config) => IdCardMsg::SaveSettled(store.save_id_card(config).await),
        IdCardCmd::ScheduleClear { token, delay } => {
            tokio::time::sleep(delay).await;
            IdCardMsg::ClearSaved { token }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::updater::SavePhase;
    use oba_core::models::{NotificationsConfig, QrFlag};
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

    /// Store that cannot even fetch.
    struct Unreachable;

    #[async_trait]
    impl SettingsStore for Unreachable {
        async fn fetch_settings(&self) -> StoreResult<AdminSettings> {
            Err(StoreError::fetch_failed("connection refused"))
        }
        async fn save_id_card(&self, _config: IdCardConfig) -> StoreResult<()> {
            Err(StoreError::save_failed(DocumentKind::IdCard, "connection refused"))
        }
        async fn save_notifications(&self, _config: NotificationsConfig) -> StoreResult<()> {
            Err(StoreError::save_failed(DocumentKind::Notifications, "connection refused"))
        }
    }

    async fn mounted(store: Arc<dyn SettingsStore>) -> IdCardScreen {
        let (mut screen, cmd) = IdCardScreen::new(store);
        let msg = run_command(screen.store(), cmd).await;
        screen.update(msg);
        screen
    }

    async fn settle(screen: &mut IdCardScreen, mut cmd: Option<IdCardCmd>) {
        while let Some(next) = cmd.take() {
            let msg = run_command(screen.store(), next).await;
            cmd = screen.update(msg);
        }
    }

    fn working(screen: &IdCardScreen) -> &IdCardConfig {
        screen.model.working.as_ref().unwrap()
    }

    #[tokio::test]
    async fn mount_seeds_both_copies() {
        let screen = mounted(Arc::new(MemoryStore::new())).await;

        assert!(screen.model.loader.is_ready());
        assert_eq!(screen.model.working, screen.model.saved);
        assert_eq!(working(&screen).fields.len(), 6);
        assert!(!screen.model.modified);
    }

    #[tokio::test]
    async fn failed_fetch_blocks_the_screen_until_reload() {
        let mut screen = mounted(Arc::new(Unreachable)).await;

        assert!(!screen.model.loader.is_ready());
        assert!(screen.model.loader.error().unwrap().contains("connection refused"));
        assert!(screen.model.working.is_none());

        // Editing and saving are inert without a working copy.
        assert!(screen.update(IdCardMsg::ToggleQrFlag(QrFlag::Photo)).is_none());
        assert!(screen.update(IdCardMsg::Save).is_none());

        let cmd = screen.update(IdCardMsg::Reload);
        assert!(matches!(cmd, Some(IdCardCmd::Fetch)));
        assert!(screen.model.loader.is_loading());
    }

    #[tokio::test]
    async fn toggle_required_respects_visibility() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(IdCardMsg::ToggleVisible("4".to_string()));
        assert!(!working(&screen).field("4").unwrap().visible);

        // Hidden field: the toggle is refused.
        screen.update(IdCardMsg::ToggleRequired("4".to_string()));
        assert!(!working(&screen).field("4").unwrap().required);

        screen.update(IdCardMsg::ToggleVisible("4".to_string()));
        screen.update(IdCardMsg::ToggleRequired("4".to_string()));
        assert!(working(&screen).field("4").unwrap().required);
    }

    #[tokio::test]
    async fn order_input_applies_and_re_sorts() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(IdCardMsg::SetOrderInput {
            id: "4".to_string(),
            value: "1".to_string(),
        });

        let names: Vec<&str> = working(&screen).fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names[..2], ["fullName", "bloodType"]);
        assert!(screen.model.modified);
        assert!(screen.model.input_error.is_none());
    }

    #[tokio::test]
    async fn bad_order_input_never_reaches_the_document() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;
        let before = working(&screen).clone();

        screen.update(IdCardMsg::SetOrderInput {
            id: "4".to_string(),
            value: "primero".to_string(),
        });

        assert_eq!(working(&screen), &before);
        assert!(!screen.model.modified);
        assert!(screen.model.input_error.as_ref().unwrap().contains("whole number"));

        // The next valid edit clears the input error.
        screen.update(IdCardMsg::ToggleQrFlag(QrFlag::Photo));
        assert!(screen.model.input_error.is_none());
    }

    #[tokio::test]
    async fn expiration_input_checks_the_range() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(IdCardMsg::SetExpirationInput("90".to_string()));
        assert_eq!(working(&screen).qr_config.expiration_days, 90);

        screen.update(IdCardMsg::SetExpirationInput("91".to_string()));
        assert_eq!(working(&screen).qr_config.expiration_days, 90);
        assert!(screen.model.input_error.as_ref().unwrap().contains("between 1 and 90"));

        screen.update(IdCardMsg::SetExpirationInput("1".to_string()));
        assert_eq!(working(&screen).qr_config.expiration_days, 1);
        assert!(screen.model.input_error.is_none());
    }

    #[tokio::test]
    async fn save_promotes_the_working_copy() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        screen.update(IdCardMsg::ToggleQrFlag(QrFlag::Allergies));
        assert!(screen.model.modified);
        assert_ne!(screen.model.working, screen.model.saved);

        let cmd = screen.update(IdCardMsg::Save);
        assert!(matches!(cmd, Some(IdCardCmd::Push(_))));
        assert!(screen.model.updater.is_saving());

        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let clear = screen.update(msg);

        assert!(screen.model.updater.succeeded());
        assert!(!screen.model.modified);
        assert_eq!(screen.model.working, screen.model.saved);
        assert!(matches!(clear, Some(IdCardCmd::ScheduleClear { .. })));
    }

    #[tokio::test]
    async fn duplicate_save_is_refused_while_in_flight() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        let first = screen.update(IdCardMsg::Save);
        assert!(first.is_some());
        let second = screen.update(IdCardMsg::Save);
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn failed_save_preserves_edits_and_reset_restores_the_baseline() {
        let mut screen = mounted(Arc::new(FailingSaves)).await;
        let seeded = screen.model.saved.clone();

        screen.update(IdCardMsg::ToggleQrFlag(QrFlag::MedicalInfo));
        let edited = screen.model.working.clone();

        let cmd = screen.update(IdCardMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let followup = screen.update(msg);

        assert!(followup.is_none());
        assert_eq!(screen.model.updater.phase(), SavePhase::Failed);
        assert!(screen.model.updater.error().unwrap().contains("store unreachable"));
        // Working copy keeps the edits; the baseline never moved.
        assert_eq!(screen.model.working, edited);
        assert_eq!(screen.model.saved, seeded);

        screen.update(IdCardMsg::Reset);
        assert_eq!(screen.model.working, seeded);
        assert!(!screen.model.modified);
    }

    #[tokio::test]
    async fn reset_returns_to_the_last_save_point() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;
        screen = screen.with_clear_delay(Duration::from_millis(5));

        screen.update(IdCardMsg::SetExpirationInput("14".to_string()));
        let cmd = screen.update(IdCardMsg::Save);
        settle(&mut screen, cmd).await; // also consumes the auto-clear

        screen.update(IdCardMsg::ToggleVisible("2".to_string()));
        screen.update(IdCardMsg::Reset);

        assert_eq!(working(&screen).qr_config.expiration_days, 14);
        assert!(working(&screen).field("2").unwrap().visible);
    }

    #[tokio::test]
    async fn success_flag_auto_clears_after_the_delay() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;
        screen = screen.with_clear_delay(Duration::from_millis(30));

        let cmd = screen.update(IdCardMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let clear = screen.update(msg);
        assert!(screen.model.updater.succeeded());

        // Running the scheduled command sleeps through the delay.
        let msg = run_command(screen.store(), clear.unwrap()).await;
        screen.update(msg);
        assert_eq!(screen.model.updater.phase(), SavePhase::Idle);
    }

    #[tokio::test]
    async fn stale_clear_is_ignored_after_a_newer_save() {
        let mut screen = mounted(Arc::new(MemoryStore::new())).await;

        let cmd = screen.update(IdCardMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        let first_clear = screen.update(msg);
        let stale_token = match first_clear {
            Some(IdCardCmd::ScheduleClear { token, .. }) => token,
            other => panic!("expected a scheduled clear, got {other:?}"),
        };

        let cmd = screen.update(IdCardMsg::Save);
        let msg = run_command(screen.store(), cmd.unwrap()).await;
        screen.update(msg);

        screen.update(IdCardMsg::ClearSaved { token: stale_token });
        assert!(screen.model.updater.succeeded());
    }
}
