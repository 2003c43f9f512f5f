//! The ID-card settings document.

use serde::{Deserialize, Serialize};

/// Lower bound for the QR expiration window, in days.
pub const EXPIRATION_DAYS_MIN: i32 = 1;
/// Upper bound for the QR expiration window, in days.
pub const EXPIRATION_DAYS_MAX: i32 = 90;

/// Returns true when `days` is an acceptable QR expiration window.
pub fn expiration_days_in_range(days: i32) -> bool {
    (EXPIRATION_DAYS_MIN..=EXPIRATION_DAYS_MAX).contains(&days)
}

/// One field shown on the digital identification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCardField {
    /// Unique key of the entry.
    pub id: String,
    /// Machine name (`fullName`, `bloodType`, ...).
    pub name: String,
    /// Display text.
    pub label: String,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Whether the field appears on the card.
    pub visible: bool,
    /// Position in the display sequence, ascending. Values need not be
    /// contiguous; equal values keep their prior relative position.
    pub order: i32,
}

/// Selector for the five boolean content switches of [`QrConfig`].
///
/// The expiration window is not a flag and cannot be addressed here; it has
/// its own setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFlag {
    Photo,
    EmergencyContacts,
    MedicalInfo,
    BloodType,
    Allergies,
}

impl QrFlag {
    /// Display name shown next to the switch.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Photo => "Incluir Foto",
            Self::EmergencyContacts => "Contactos de Emergencia",
            Self::MedicalInfo => "Información Médica",
            Self::BloodType => "Tipo de Sangre",
            Self::Allergies => "Alergias",
        }
    }

    /// Get all flags, in display order.
    pub fn all() -> &'static [QrFlag] {
        &[
            Self::Photo,
            Self::EmergencyContacts,
            Self::MedicalInfo,
            Self::BloodType,
            Self::Allergies,
        ]
    }
}

/// Content and lifetime settings for the ID-card QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrConfig {
    pub include_photo: bool,
    pub include_emergency_contacts: bool,
    pub include_medical_info: bool,
    pub include_blood_type: bool,
    pub include_allergies: bool,
    /// Days before an issued QR code expires, in `[1, 90]`.
    pub expiration_days: i32,
}

impl QrConfig {
    /// Read one content switch.
    pub fn flag(&self, flag: QrFlag) -> bool {
        match flag {
            QrFlag::Photo => self.include_photo,
            QrFlag::EmergencyContacts => self.include_emergency_contacts,
            QrFlag::MedicalInfo => self.include_medical_info,
            QrFlag::BloodType => self.include_blood_type,
            QrFlag::Allergies => self.include_allergies,
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            include_photo: true,
            include_emergency_contacts: true,
            include_medical_info: true,
            include_blood_type: true,
            include_allergies: true,
            expiration_days: 30,
        }
    }
}

/// The full ID-card settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardConfig {
    /// Card fields, kept sorted ascending by `order`.
    pub fields: Vec<IdCardField>,
    pub qr_config: QrConfig,
}

impl IdCardConfig {
    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&IdCardField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

impl Default for IdCardConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                seed_field("1", "fullName", "Nombre Completo", true, 1),
                seed_field("2", "birthDate", "Fecha de Nacimiento", true, 2),
                seed_field("3", "documentNumber", "Número de Documento", true, 3),
                seed_field("4", "bloodType", "Tipo de Sangre", false, 4),
                seed_field("5", "allergies", "Alergias", false, 5),
                seed_field("6", "emergencyContact", "Contacto de Emergencia", false, 6),
            ],
            qr_config: QrConfig::default(),
        }
    }
}

fn seed_field(id: &str, name: &str, label: &str, required: bool, order: i32) -> IdCardField {
    IdCardField {
        id: id.to_string(),
        name: name.to_string(),
        label: label.to_string(),
        required,
        visible: true,
        order,
    }
}
