//! Demo driver for the OpenBlind admin settings screens.
//!
//! Runs a scripted editing session for each screen against a seeded
//! in-memory store with artificial latency. State transitions go through
//! `tracing`; document snapshots land on stdout.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedSender};

use oba_core::editor::channels;
use oba_core::models::{NotificationChannel, NotificationType, QrFlag, TemplateField};
use oba_core::store::{MemoryStore, SettingsStore};
use oba_screens::screens::id_card::{self, IdCardCmd, IdCardMsg, IdCardScreen};
use oba_screens::screens::notifications::{
    self, NotificationsCmd, NotificationsMsg, NotificationsScreen,
};
use oba_screens::tasks::OneShotTask;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    oba_core::logging::init_tracing("info");

    tracing::info!("OpenBlind Admin starting");
    tracing::info!("Core version: {}", oba_core::version());

    // Slow enough that the loading and saving phases are observable.
    let store: Arc<dyn SettingsStore> = Arc::new(
        MemoryStore::new().with_latency(Duration::from_millis(800), Duration::from_millis(500)),
    );

    run_id_card_session(Arc::clone(&store)).await?;
    run_notifications_session(store).await?;

    tracing::info!("demo session finished");
    Ok(())
}

/// Execute ID-card commands until the screen settles.
///
/// The auto-clear command is spawned into `timer` instead of being awaited
/// inline, so it can be superseded or cancelled like a real screen would.
async fn drive_id_card(
    screen: &mut IdCardScreen,
    timer: &mut OneShotTask,
    tx: &UnboundedSender<IdCardMsg>,
    mut cmd: Option<IdCardCmd>,
) {
    while let Some(next) = cmd.take() {
        match next {
            IdCardCmd::ScheduleClear { .. } => {
                let store = screen.store();
                let tx = tx.clone();
                timer.replace(tokio::spawn(async move {
                    let msg = id_card::run_command(store, next).await;
                    let _ = tx.send(msg);
                }));
            }
            other => {
                let msg = id_card::run_command(screen.store(), other).await;
                cmd = screen.update(msg);
            }
        }
    }
}

async fn run_id_card_session(store: Arc<dyn SettingsStore>) -> anyhow::Result<()> {
    tracing::info!("=== ID-card screen ===");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = OneShotTask::new();

    let (mut screen, cmd) = IdCardScreen::new(store);
    drive_id_card(&mut screen, &mut timer, &tx, Some(cmd)).await;
    anyhow::ensure!(
        screen.model.loader.is_ready(),
        "initial fetch failed: {:?}",
        screen.model.loader.error()
    );
    print_id_card(&screen);

    // A few edits, including one the input validation refuses.
    screen.update(IdCardMsg::ToggleQrFlag(QrFlag::Photo));
    screen.update(IdCardMsg::SetExpirationInput("180".to_string()));
    if let Some(message) = &screen.model.input_error {
        tracing::warn!("input rejected: {message}");
    }
    screen.update(IdCardMsg::SetExpirationInput("45".to_string()));
    screen.update(IdCardMsg::SetOrderInput {
        id: "4".to_string(),
        value: "1".to_string(),
    });
    print_id_card(&screen);

    let cmd = screen.update(IdCardMsg::Save);
    drive_id_card(&mut screen, &mut timer, &tx, cmd).await;
    tracing::info!(success = screen.model.updater.succeeded(), "save settled");

    // The spawned timer delivers the auto-clear through the channel.
    if screen.model.updater.succeeded() {
        match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
            Ok(Some(msg)) => {
                screen.update(msg);
                tracing::info!(
                    cleared = !screen.model.updater.succeeded(),
                    "success flag after auto-clear"
                );
            }
            _ => tracing::warn!("auto-clear never arrived"),
        }
    }

    Ok(())
}

/// Execute notifications commands until the screen settles.
async fn drive_notifications(
    screen: &mut NotificationsScreen,
    timer: &mut OneShotTask,
    tx: &UnboundedSender<NotificationsMsg>,
    mut cmd: Option<NotificationsCmd>,
) {
    while let Some(next) = cmd.take() {
        match next {
            NotificationsCmd::ScheduleClear { .. } => {
                let store = screen.store();
                let tx = tx.clone();
                timer.replace(tokio::spawn(async move {
                    let msg = notifications::run_command(store, next).await;
                    let _ = tx.send(msg);
                }));
            }
            other => {
                let msg = notifications::run_command(screen.store(), other).await;
                cmd = screen.update(msg);
            }
        }
    }
}

async fn run_notifications_session(store: Arc<dyn SettingsStore>) -> anyhow::Result<()> {
    tracing::info!("=== Notifications screen ===");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = OneShotTask::new();

    let (mut screen, cmd) = NotificationsScreen::new(store);
    drive_notifications(&mut screen, &mut timer, &tx, Some(cmd)).await;
    anyhow::ensure!(
        screen.model.loader.is_ready(),
        "initial fetch failed: {:?}",
        screen.model.loader.error()
    );
    print_notifications(&screen);

    screen.update(NotificationsMsg::ToggleChannelEnabled(NotificationChannel::Sms));
    if let Some(config) = &screen.model.working {
        if let Some(sms) = config.channel(NotificationChannel::Sms) {
            println!("SMS channel re-enabled; per-type opt-ins:");
            for (label, kind) in notifications::type_rows() {
                println!("  {:<20} {}", label, sms.types[&kind]);
            }
        }
    }

    screen.update(NotificationsMsg::ToggleEditing(NotificationType::RouteStart));
    screen.update(NotificationsMsg::SetTemplateField {
        kind: NotificationType::RouteStart,
        field: TemplateField::Subject,
        value: "Ruta iniciada".to_string(),
    });
    screen.update(NotificationsMsg::InsertVariable {
        kind: NotificationType::RouteStart,
        variable: "estimatedTime".to_string(),
    });
    print_notifications(&screen);

    let cmd = screen.update(NotificationsMsg::Save);
    drive_notifications(&mut screen, &mut timer, &tx, cmd).await;
    tracing::info!(success = screen.model.updater.succeeded(), "save settled");

    if screen.model.updater.succeeded() {
        match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
            Ok(Some(msg)) => {
                screen.update(msg);
                tracing::info!(
                    cleared = !screen.model.updater.succeeded(),
                    "success flag after auto-clear"
                );
            }
            _ => tracing::warn!("auto-clear never arrived"),
        }
    }

    // Drafts are discarded by reset; the saved baseline stays.
    screen.update(NotificationsMsg::SetLegalText("borrador temporal".to_string()));
    screen.update(NotificationsMsg::Reset);
    tracing::info!(
        legal_text_unchanged = screen.model.working == screen.model.saved,
        "reset discarded the draft legal text"
    );

    if let Some(saved) = &screen.model.saved {
        println!("Persisted notifications document:");
        println!("{}", serde_json::to_string_pretty(saved)?);
    }

    Ok(())
}

fn print_id_card(screen: &IdCardScreen) {
    let Some(config) = &screen.model.working else {
        return;
    };
    println!("ID-card fields:");
    for field in &config.fields {
        println!(
            "  [{}] {:<28} required={:<5} visible={:<5} order={}",
            field.id, field.label, field.required, field.visible, field.order
        );
    }
    println!("QR content:");
    for &flag in QrFlag::all() {
        println!("  {:<28} {}", flag.label(), config.qr_config.flag(flag));
    }
    println!("  QR expiration days: {}", config.qr_config.expiration_days);
}

fn print_notifications(screen: &NotificationsScreen) {
    let Some(config) = &screen.model.working else {
        return;
    };
    println!("Notification channels:");
    for (label, channel) in notifications::channel_rows() {
        let Some(entry) = config.channel(channel) else {
            continue;
        };
        let (active, total) = channels::enabled_type_count(entry);
        println!(
            "  {:<20} enabled={:<5} types {active}/{total}",
            label, entry.enabled
        );
    }
    println!("Templates:");
    for template in &config.templates {
        println!("  {:<20} {}", template.kind.label(), template.subject);
        if screen.model.editing == Some(template.kind) {
            println!("    {}: {}", TemplateField::Subject.label(), template.subject);
            println!("    {}: {}", TemplateField::Body.label(), template.body);
        }
    }
}
