//! Partial updates for entities and categories.
//!
//! Every field is optional; `None` leaves the target untouched.

use serde::{Deserialize, Serialize};

use crate::{Geometry, Payload, SeatCategory, Style};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeometryPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
}

impl GeometryPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Merge into `geometry`, returning whether anything changed
    pub fn apply(&self, geometry: &mut Geometry) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut geometry.x, self.x),
            (&mut geometry.y, self.y),
            (&mut geometry.width, self.width),
            (&mut geometry.height, self.height),
            (&mut geometry.rotation, self.rotation),
            (&mut geometry.scale_x, self.scale_x),
            (&mut geometry.scale_y, self.scale_y),
        ] {
            if let Some(v) = value {
                if *slot != v {
                    *slot = v;
                    changed = true;
                }
            }
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StylePatch {
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl StylePatch {
    pub fn apply(&self, style: &mut Style) -> bool {
        let mut changed = false;
        if let Some(fill) = &self.fill_color {
            changed |= style.fill_color != *fill;
            style.fill_color = fill.clone();
        }
        if let Some(stroke) = &self.stroke_color {
            changed |= style.stroke_color != *stroke;
            style.stroke_color = stroke.clone();
        }
        if let Some(width) = self.stroke_width {
            changed |= style.stroke_width != width;
            style.stroke_width = width;
        }
        if let Some(opacity) = self.opacity {
            changed |= style.opacity != opacity;
            style.opacity = opacity;
        }
        changed
    }
}

/// Partial update of an entity.
///
/// `payload` replaces the payload wholesale and must have the entity's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntityPatch {
    pub geometry: Option<GeometryPatch>,
    pub style: Option<StylePatch>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub payload: Option<Payload>,
}

impl EntityPatch {
    pub fn geometry(patch: GeometryPatch) -> Self {
        Self {
            geometry: Some(patch),
            ..Default::default()
        }
    }

    pub fn style(patch: StylePatch) -> Self {
        Self {
            style: Some(patch),
            ..Default::default()
        }
    }

    pub fn payload(payload: Payload) -> Self {
        Self {
            payload: Some(payload),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color_hex: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl CategoryPatch {
    pub fn apply(&self, category: &mut SeatCategory) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color_hex {
            category.color_hex = color.clone();
        }
        if let Some(price) = self.price {
            category.price = price;
        }
        if let Some(description) = &self.description {
            category.description = Some(description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_patch_reports_change() {
        let mut g = Geometry::new(0.0, 0.0, 10.0, 10.0);
        assert!(GeometryPatch::position(5.0, 0.0).apply(&mut g));
        assert_eq!(g.x, 5.0);
        assert!(!GeometryPatch::position(5.0, 0.0).apply(&mut g));
    }

    #[test]
    fn test_empty_patch_from_json() {
        let patch: EntityPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch, EntityPatch::default());
    }

    #[test]
    fn test_category_patch_merges() {
        let mut c = SeatCategory::new("vip", "VIP", "#000000", 10.0);
        CategoryPatch {
            color_hex: Some("#ff0000".into()),
            ..Default::default()
        }
        .apply(&mut c);
        assert_eq!(c.color_hex, "#ff0000");
        assert_eq!(c.name, "VIP");
        assert_eq!(c.price, 10.0);
    }
}
