//! Operations over the QR content switches.

use crate::models::{QrConfig, QrFlag};

/// Flip one content switch, returning the updated config.
///
/// [`QrFlag`] only names the boolean switches, so the integer expiration
/// window cannot be toggled through this path.
pub fn toggle_flag(config: &QrConfig, flag: QrFlag) -> QrConfig {
    let mut updated = config.clone();
    match flag {
        QrFlag::Photo => updated.include_photo = !updated.include_photo,
        QrFlag::EmergencyContacts => {
            updated.include_emergency_contacts = !updated.include_emergency_contacts
        }
        QrFlag::MedicalInfo => updated.include_medical_info = !updated.include_medical_info,
        QrFlag::BloodType => updated.include_blood_type = !updated.include_blood_type,
        QrFlag::Allergies => updated.include_allergies = !updated.include_allergies,
    }
    updated
}

/// Set the expiration window, in days.
///
/// The value is stored verbatim. Callers validate the `[1, 90]` range
/// first and surface out-of-range input as an error; nothing is clamped
/// here.
pub fn set_expiration_days(config: &QrConfig, days: i32) -> QrConfig {
    QrConfig {
        expiration_days: days,
        ..config.clone()
    }
}
