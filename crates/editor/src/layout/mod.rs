//! Geometric transform engine.
//!
//! Pure functions that compute new geometry for the selected entities.
//! They never touch paint order or payloads. All layout works on the
//! axis-aligned bounding box of an entity's transformed rectangle.

mod align;
mod distribute;
pub mod rows;
mod snap;

pub use align::{align, center_on_canvas, Alignment, CanvasAxis};
pub use distribute::{distribute, DistributeAxis};
pub use snap::{snap_point, snap_to_grid};

use kurbo::{Affine, Point, Rect, Vec2};
use shared::{Entity, Geometry};

/// Affine transform taking local box coordinates to canvas coordinates
pub fn transform_of(geometry: &Geometry) -> Affine {
    Affine::translate((geometry.x, geometry.y))
        * Affine::rotate(geometry.rotation.to_radians())
        * Affine::scale_non_uniform(geometry.scale_x, geometry.scale_y)
}

/// Axis-aligned bounding box of the entity on the canvas
pub fn bounds(geometry: &Geometry) -> Rect {
    let local = Rect::new(0.0, 0.0, geometry.width, geometry.height);
    if geometry.is_axis_aligned() {
        local + Vec2::new(geometry.x, geometry.y)
    } else {
        transform_of(geometry).transform_rect_bbox(local)
    }
}

/// Union of the bounding boxes, `None` for an empty slice
pub fn union_bounds<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Option<Rect> {
    geometries
        .into_iter()
        .map(bounds)
        .reduce(|acc, r| acc.union(r))
}

/// Map a point expressed in a group's local space to canvas space
pub fn to_canvas(group: &Geometry, local: Point) -> Point {
    if group.is_axis_aligned() {
        Point::new(group.x + local.x, group.y + local.y)
    } else {
        transform_of(group) * local
    }
}

/// Move an entity so its bounding box starts at `left` and/or `top`.
///
/// Returns whether the geometry changed.
pub(crate) fn move_bounds_to(geometry: &mut Geometry, left: Option<f64>, top: Option<f64>) -> bool {
    let b = bounds(geometry);
    let before = (geometry.x, geometry.y);
    if let Some(left) = left {
        geometry.x = left + (geometry.x - b.x0);
    }
    if let Some(top) = top {
        geometry.y = top + (geometry.y - b.y0);
    }
    before != (geometry.x, geometry.y)
}

/// Add a signed degree delta to each unlocked entity's rotation.
pub fn rotate_by(items: &mut [&mut Entity], delta_degrees: f64) -> bool {
    if delta_degrees == 0.0 {
        return false;
    }
    let mut changed = false;
    for entity in items.iter_mut().filter(|e| !e.locked) {
        entity.geometry.rotation += delta_degrees;
        changed = true;
    }
    changed
}
