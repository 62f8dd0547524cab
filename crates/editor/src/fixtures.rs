//! Factory functions for creating test data.
//!
//! Entities get caller-chosen ids so tests can refer to them by name.

use shared::{Entity, Payload};

use crate::state::scene::{make_group, GroupKind, SceneState};
use crate::templates;

// ── Entity factories ────────────────────────────────────────────

fn with_id(mut entity: Entity, id: &str) -> Entity {
    entity.id = id.to_string();
    entity
}

/// 24x24 VIP seat labelled with its id
pub fn seat_at(id: &str, x: f64, y: f64) -> Entity {
    with_id(templates::seat(x, y, id, "vip"), id)
}

/// Seat with an explicit category, availability and price override
pub fn seat_with(id: &str, category_id: &str, is_available: bool, price: Option<f64>) -> Entity {
    let mut seat = seat_at(id, 0.0, 0.0);
    if let Payload::Seat(p) = &mut seat.payload {
        p.category_id = category_id.to_string();
        p.is_available = is_available;
        p.price_override = price;
    }
    seat
}

/// 300x80 stage
pub fn stage_at(id: &str, x: f64, y: f64) -> Entity {
    with_id(templates::stage(x, y), id)
}

pub fn text_at(id: &str, x: f64, y: f64, content: &str) -> Entity {
    with_id(templates::text(x, y, content), id)
}

/// Generic group around children given in canvas coordinates
pub fn group_of(id: &str, children: Vec<Entity>) -> Entity {
    make_group(id.to_string(), GroupKind::Generic, None, children)
}

// ── Scene factories ─────────────────────────────────────────────

/// Scene holding `entities` in paint order
pub fn scene_of(entities: Vec<Entity>) -> SceneState {
    SceneState {
        entities,
        version: 0,
    }
}
