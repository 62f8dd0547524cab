use serde::{Deserialize, Serialize};

pub mod patch;

pub use patch::{CategoryPatch, EntityPatch, GeometryPatch, StylePatch};

/// Unique identifier of a placed entity
pub type EntityId = String;

/// Unique identifier of a seat category
pub type CategoryId = String;

fn default_true() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

// ============================================================================
// Geometry and style
// ============================================================================

/// Placement of an entity on the canvas.
///
/// `x`/`y` is the top-left corner of the unrotated box. Rotation (degrees)
/// and scale are applied about that corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Width after scaling (rotation not applied)
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after scaling (rotation not applied)
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// True when neither rotation nor scaling is applied
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Paint attributes of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Style {
    pub fn new(fill: &str, stroke: &str, stroke_width: f64) -> Self {
        Self {
            fill_color: fill.to_string(),
            stroke_color: stroke.to_string(),
            stroke_width,
            opacity: 1.0,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("#ffffff", "#000000", 1.0)
    }
}

// ============================================================================
// Entity kinds and payloads
// ============================================================================

/// Discriminant of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Seat,
    Stage,
    Door,
    Text,
    RowGroup,
    Wall,
    GenericGroup,
}

impl EntityKind {
    /// Wire name, identical to the snapshot tag
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Seat => "seat",
            EntityKind::Stage => "stage",
            EntityKind::Door => "door",
            EntityKind::Text => "text",
            EntityKind::RowGroup => "row-group",
            EntityKind::Wall => "wall",
            EntityKind::GenericGroup => "generic-group",
        }
    }

    /// Human readable name for layer lists
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Seat => "Seat",
            EntityKind::Stage => "Stage",
            EntityKind::Door => "Door",
            EntityKind::Text => "Text",
            EntityKind::RowGroup => "Row",
            EntityKind::Wall => "Wall",
            EntityKind::GenericGroup => "Group",
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, EntityKind::RowGroup | EntityKind::GenericGroup)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPayload {
    pub label: String,
    pub category_id: CategoryId,
    /// Explicit price; when absent the category price applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override: Option<f64>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePayload {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorPayload {
    pub label: String,
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPayload {
    pub content: String,
    pub font_size: f64,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPayload {
    pub thickness: f64,
}

/// Children owned by a group.
///
/// Each child's `geometry.x`/`geometry.y` is an offset from the group origin.
/// Children carry no reference back to their group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroupPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub children: Vec<Entity>,
}

impl GroupPayload {
    /// Child ids in paint order
    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.id.as_str()).collect()
    }

    /// Child offsets relative to the group origin, in paint order
    pub fn child_local_offsets(&self) -> Vec<(f64, f64)> {
        self.children
            .iter()
            .map(|c| (c.geometry.x, c.geometry.y))
            .collect()
    }
}

/// Kind-specific data of an entity, tagged with its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Payload {
    Seat(SeatPayload),
    Stage(StagePayload),
    Door(DoorPayload),
    Text(TextPayload),
    RowGroup(GroupPayload),
    Wall(WallPayload),
    GenericGroup(GroupPayload),
}

impl Payload {
    pub fn kind(&self) -> EntityKind {
        match self {
            Payload::Seat(_) => EntityKind::Seat,
            Payload::Stage(_) => EntityKind::Stage,
            Payload::Door(_) => EntityKind::Door,
            Payload::Text(_) => EntityKind::Text,
            Payload::RowGroup(_) => EntityKind::RowGroup,
            Payload::Wall(_) => EntityKind::Wall,
            Payload::GenericGroup(_) => EntityKind::GenericGroup,
        }
    }

    pub fn group(&self) -> Option<&GroupPayload> {
        match self {
            Payload::RowGroup(g) | Payload::GenericGroup(g) => Some(g),
            _ => None,
        }
    }

    pub fn group_mut(&mut self) -> Option<&mut GroupPayload> {
        match self {
            Payload::RowGroup(g) | Payload::GenericGroup(g) => Some(g),
            _ => None,
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// A placed, selectable item on the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub geometry: Geometry,
    pub style: Style,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Locked entities ignore pointer selection and moves
    #[serde(default)]
    pub locked: bool,
    pub payload: Payload,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, geometry: Geometry, style: Style, payload: Payload) -> Self {
        Self {
            id: id.into(),
            geometry,
            style,
            visible: true,
            locked: false,
            payload,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.payload.kind()
    }

    pub fn is_group(&self) -> bool {
        self.kind().is_group()
    }

    pub fn seat(&self) -> Option<&SeatPayload> {
        match &self.payload {
            Payload::Seat(seat) => Some(seat),
            _ => None,
        }
    }

    /// Group children, empty for non-group kinds
    pub fn children(&self) -> &[Entity] {
        self.payload
            .group()
            .map(|g| g.children.as_slice())
            .unwrap_or(&[])
    }

    /// Label shown in layer lists (seat label, stage name, text content, ...)
    pub fn label(&self) -> Option<&str> {
        match &self.payload {
            Payload::Seat(p) => Some(&p.label),
            Payload::Stage(p) => Some(&p.label),
            Payload::Door(p) => Some(&p.label),
            Payload::Text(p) => Some(&p.content),
            Payload::RowGroup(g) | Payload::GenericGroup(g) => g.label.as_deref(),
            Payload::Wall(_) => None,
        }
    }

    /// Visit this entity and every nested child, depth first
    pub fn visit(&self, f: &mut impl FnMut(&Entity)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Mutable variant of [`Entity::visit`]
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Entity)) {
        f(self);
        if let Some(group) = self.payload.group_mut() {
            for child in &mut group.children {
                child.visit_mut(f);
            }
        }
    }
}

// ============================================================================
// Categories and snapshots
// ============================================================================

/// Named, colored, priced classification referenced by seats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatCategory {
    pub id: CategoryId,
    pub name: String,
    pub color_hex: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SeatCategory {
    pub fn new(id: &str, name: &str, color_hex: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color_hex: color_hex.to_string(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Serialized scene document: the ordered top-level entity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneSnapshot {
    pub objects: Vec<Entity>,
}
