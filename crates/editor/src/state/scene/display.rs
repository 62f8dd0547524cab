//! Display helpers for layer lists

use shared::Entity;

/// Name shown in the layers panel, e.g. `Seat A12` or `Group (3f2a9c1b)`
pub fn entity_display_name(entity: &Entity) -> String {
    match entity.label() {
        Some(label) if !label.is_empty() => {
            format!("{} {}", entity.kind().display_name(), label)
        }
        _ => format!("{} ({})", entity.kind().display_name(), short_id(&entity.id)),
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
