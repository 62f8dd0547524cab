//! Default entities created by the placement tools.

use serde::{Deserialize, Serialize};
use shared::{
    DoorPayload, Entity, Geometry, Payload, SeatPayload, StagePayload, Style, TextPayload,
    WallPayload,
};

/// Fill marker stored on seats: their color always comes from the category.
pub const CATEGORY_FILL: &str = "category";

pub const SEAT_SIZE: f64 = 24.0;

/// Active placement tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Seat,
    Stage,
    Door,
    Text,
    Wall,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn seat(x: f64, y: f64, label: &str, category_id: &str) -> Entity {
    Entity::new(
        new_id(),
        Geometry::new(x, y, SEAT_SIZE, SEAT_SIZE),
        Style::new(CATEGORY_FILL, "#ffffff", 1.0),
        Payload::Seat(SeatPayload {
            label: label.to_string(),
            category_id: category_id.to_string(),
            price_override: None,
            is_available: true,
        }),
    )
}

pub fn stage(x: f64, y: f64) -> Entity {
    Entity::new(
        new_id(),
        Geometry::new(x, y, 300.0, 80.0),
        Style::new("#7c3aed", "#a855f7", 2.0),
        Payload::Stage(StagePayload {
            label: "STAGE".to_string(),
        }),
    )
}

pub fn door(x: f64, y: f64) -> Entity {
    Entity::new(
        new_id(),
        Geometry::new(x, y, 60.0, 20.0),
        Style::new("#ef4444", "#dc2626", 2.0),
        Payload::Door(DoorPayload {
            label: "EXIT".to_string(),
            is_emergency: false,
        }),
    )
}

pub fn text(x: f64, y: f64, content: &str) -> Entity {
    let font_size = 16.0;
    Entity::new(
        new_id(),
        // Rough box until the renderer measures the text
        Geometry::new(x, y, content.chars().count() as f64 * font_size * 0.6, font_size * 1.2),
        Style::new("#ffffff", "#ffffff", 0.0),
        Payload::Text(TextPayload {
            content: content.to_string(),
            font_size,
            font_family: "Arial".to_string(),
        }),
    )
}

pub fn wall(x: f64, y: f64) -> Entity {
    let thickness = 8.0;
    Entity::new(
        new_id(),
        Geometry::new(x, y, 200.0, thickness),
        Style::new("#6b7280", "#4b5563", 1.0),
        Payload::Wall(WallPayload { thickness }),
    )
}

/// Copy an entity (and its children) under fresh ids
pub fn clone_with_new_ids(entity: &Entity) -> Entity {
    let mut copy = entity.clone();
    copy.visit_mut(&mut |e| e.id = new_id());
    copy
}
