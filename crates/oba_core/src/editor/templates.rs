//! Operations over message templates and the shared legal text.

use crate::models::{MessageTemplate, NotificationsConfig, NotificationType, TemplateField};

/// Replace the subject or body of the template matching `kind`.
pub fn set_field(
    templates: &[MessageTemplate],
    kind: NotificationType,
    field: TemplateField,
    value: impl Into<String>,
) -> Vec<MessageTemplate> {
    let value = value.into();
    templates
        .iter()
        .map(|template| {
            if template.kind == kind {
                let mut updated = template.clone();
                match field {
                    TemplateField::Subject => updated.subject = value.clone(),
                    TemplateField::Body => updated.body = value.clone(),
                }
                updated
            } else {
                template.clone()
            }
        })
        .collect()
}

/// Append ` {{variable}}` to the matching template's body.
///
/// The name is not checked against the template's `variables` list: the
/// editor only offers names from that list, while a hand-edited body may
/// already have drifted from it. Both are accepted.
pub fn insert_variable(
    templates: &[MessageTemplate],
    kind: NotificationType,
    variable: &str,
) -> Vec<MessageTemplate> {
    templates
        .iter()
        .map(|template| {
            if template.kind == kind {
                let mut updated = template.clone();
                updated.body = format!("{} {{{{{}}}}}", template.body, variable);
                updated
            } else {
                template.clone()
            }
        })
        .collect()
}

/// Replace the legal text appended to outgoing email notifications.
pub fn set_legal_text(
    config: &NotificationsConfig,
    value: impl Into<String>,
) -> NotificationsConfig {
    NotificationsConfig {
        legal_text: value.into(),
        ..config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Vec<MessageTemplate> {
        NotificationsConfig::default().templates
    }

    #[test]
    fn set_field_replaces_subject_only() {
        let templates = seeded();
        let updated = set_field(
            &templates,
            NotificationType::RouteStart,
            TemplateField::Subject,
            "Ruta iniciada",
        );

        let template = &updated[0];
        assert_eq!(template.kind, NotificationType::RouteStart);
        assert_eq!(template.subject, "Ruta iniciada");
        assert_eq!(template.body, templates[0].body);
        assert_eq!(&updated[1..], &templates[1..]);
    }

    #[test]
    fn set_field_replaces_body_only() {
        let templates = seeded();
        let updated = set_field(
            &templates,
            NotificationType::Emergency,
            TemplateField::Body,
            "Nueva emergencia",
        );

        let template = updated.iter().find(|t| t.kind == NotificationType::Emergency).unwrap();
        assert_eq!(template.body, "Nueva emergencia");
        assert_eq!(
            template.subject,
            templates.iter().find(|t| t.kind == NotificationType::Emergency).unwrap().subject
        );
    }

    #[test]
    fn insert_appends_space_and_braces() {
        let templates = vec![MessageTemplate {
            kind: NotificationType::RouteStart,
            subject: "s".to_string(),
            body: "Hola".to_string(),
            variables: vec!["userName".to_string()],
        }];

        let updated = insert_variable(&templates, NotificationType::RouteStart, "userName");
        assert_eq!(updated[0].body, "Hola {{userName}}");
    }

    #[test]
    fn insert_accepts_undeclared_variables() {
        let templates = seeded();
        let updated = insert_variable(&templates, NotificationType::RouteEnd, "weather");

        let template = updated.iter().find(|t| t.kind == NotificationType::RouteEnd).unwrap();
        assert!(template.body.ends_with(" {{weather}}"));
        assert!(!template.variables.contains(&"weather".to_string()));
    }

    #[test]
    fn legal_text_is_shared_not_per_template() {
        let config = NotificationsConfig::default();
        let updated = set_legal_text(&config, "Aviso legal actualizado.");

        assert_eq!(updated.legal_text, "Aviso legal actualizado.");
        assert_eq!(updated.templates, config.templates);
        assert_eq!(updated.channels, config.channels);
    }
}
