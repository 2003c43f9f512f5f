//! The notifications settings document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{NotificationChannel, NotificationType};

/// Per-channel delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Which delivery mechanism this entry configures. Unique per document.
    pub channel: NotificationChannel,
    /// Master switch. A disabled channel keeps its per-type selections so
    /// re-enabling restores them.
    pub enabled: bool,
    /// Per-type opt-in, one entry per [`NotificationType`].
    pub types: BTreeMap<NotificationType, bool>,
}

/// Message template for one notification type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// The notification type this template renders. Unique per document.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Subject line, used by the email channel.
    pub subject: String,
    /// Body text; may embed `{{variable}}` placeholders.
    pub body: String,
    /// Placeholder names offered to the editor, in display order.
    pub variables: Vec<String>,
}

/// Selector for the two editable text fields of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Subject,
    Body,
}

impl TemplateField {
    /// Display name shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subject => "Asunto (para Email)",
            Self::Body => "Cuerpo del mensaje",
        }
    }
}

/// The full notifications settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsConfig {
    /// One entry per delivery channel.
    pub channels: Vec<ChannelConfig>,
    /// One template per notification type.
    pub templates: Vec<MessageTemplate>,
    /// Appended to outgoing email notifications.
    pub legal_text: String,
}

impl NotificationsConfig {
    /// Look up one channel's settings.
    pub fn channel(&self, channel: NotificationChannel) -> Option<&ChannelConfig> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Look up the template for one notification type.
    pub fn template(&self, kind: NotificationType) -> Option<&MessageTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        let channels = NotificationChannel::all()
            .iter()
            .map(|&channel| ChannelConfig {
                channel,
                enabled: match channel {
                    NotificationChannel::Push | NotificationChannel::Email => true,
                    NotificationChannel::Sms => false,
                },
                types: NotificationType::all()
                    .iter()
                    .map(|&kind| (kind, seed_opt_in(channel, kind)))
                    .collect(),
            })
            .collect();

        let templates = NotificationType::all().iter().map(|&kind| seed_template(kind)).collect();

        Self {
            channels,
            templates,
            legal_text: "Este mensaje es enviado por OpenBlind. Para dejar de recibir \
                         notificaciones, actualiza tus preferencias en la aplicación."
                .to_string(),
        }
    }
}

fn seed_opt_in(channel: NotificationChannel, kind: NotificationType) -> bool {
    match channel {
        NotificationChannel::Push => true,
        NotificationChannel::Email => kind != NotificationType::RouteEnd,
        NotificationChannel::Sms => {
            matches!(kind, NotificationType::SafetyAlert | NotificationType::Emergency)
        }
    }
}

fn seed_template(kind: NotificationType) -> MessageTemplate {
    let (subject, body, variables): (&str, &str, &[&str]) = match kind {
        NotificationType::RouteStart => (
            "Tu ruta ha comenzado",
            "Hola {{userName}}, has iniciado tu ruta hacia {{destination}}. \
             Tiempo estimado: {{estimatedTime}}.",
            &["userName", "destination", "estimatedTime"],
        ),
        NotificationType::RouteEnd => (
            "Ruta finalizada",
            "Hola {{userName}}, has llegado a tu destino {{destination}} de forma segura.",
            &["userName", "destination"],
        ),
        NotificationType::SafetyAlert => (
            "Alerta de seguridad",
            "Alerta: {{alertMessage}} en {{location}}. Por favor, toma precauciones.",
            &["alertMessage", "location"],
        ),
        NotificationType::SupportMessage => (
            "Mensaje de soporte",
            "Hola {{userName}}, el equipo de soporte te contacta sobre: {{issue}}.",
            &["userName", "issue"],
        ),
        NotificationType::Emergency => (
            "EMERGENCIA - Asistencia requerida",
            "EMERGENCIA: {{userName}} requiere asistencia inmediata en {{location}}. \
             Contacto: {{emergencyContact}}.",
            &["userName", "location", "emergencyContact"],
        ),
    };

    MessageTemplate {
        kind,
        subject: subject.to_string(),
        body: body.to_string(),
        variables: variables.iter().map(|v| v.to_string()).collect(),
    }
}
