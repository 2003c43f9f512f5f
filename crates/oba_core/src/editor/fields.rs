//! Operations over the ID-card `fields` collection.
//!
//! Unknown ids leave the collection unchanged.

use crate::models::IdCardField;

/// Flip `required` on the matching field.
pub fn toggle_required(fields: &[IdCardField], id: &str) -> Vec<IdCardField> {
    fields
        .iter()
        .map(|field| {
            if field.id == id {
                IdCardField {
                    required: !field.required,
                    ..field.clone()
                }
            } else {
                field.clone()
            }
        })
        .collect()
}

/// Flip `visible` on the matching field.
///
/// `required` is left untouched even when the field becomes hidden; the
/// editing surface keeps the required control disabled in that state, but
/// a path that bypasses it may store the combination.
pub fn toggle_visible(fields: &[IdCardField], id: &str) -> Vec<IdCardField> {
    fields
        .iter()
        .map(|field| {
            if field.id == id {
                IdCardField {
                    visible: !field.visible,
                    ..field.clone()
                }
            } else {
                field.clone()
            }
        })
        .collect()
}

/// Set `order` on the matching field, then re-sort ascending.
///
/// The sort is stable: fields sharing an order value keep their prior
/// relative position.
pub fn set_order(fields: &[IdCardField], id: &str, new_order: i32) -> Vec<IdCardField> {
    let mut updated: Vec<IdCardField> = fields
        .iter()
        .map(|field| {
            if field.id == id {
                IdCardField {
                    order: new_order,
                    ..field.clone()
                }
            } else {
                field.clone()
            }
        })
        .collect();
    updated.sort_by_key(|field| field.order);
    updated
}
