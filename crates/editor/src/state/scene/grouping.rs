//! Group composition and decomposition
//!
//! A group owns its children: they leave the top-level list and live in the
//! group's payload with geometry relative to the group origin.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use shared::{Entity, EntityId, Geometry, GroupPayload, Payload, Style};

use super::SceneState;
use crate::error::{EditResult, EditorError};
use crate::layout::{to_canvas, union_bounds};

/// Which group entity to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    #[default]
    Generic,
    Row,
}

/// Wrap entities given in canvas coordinates into a new group.
///
/// The group origin is the top-left of the children's union bounding box.
/// Children keep their order and are re-expressed as offsets from it.
pub fn make_group(
    id: EntityId,
    kind: GroupKind,
    label: Option<String>,
    mut children: Vec<Entity>,
) -> Entity {
    let area = union_bounds(children.iter().map(|c| &c.geometry)).unwrap_or_default();
    for child in &mut children {
        child.geometry.x -= area.x0;
        child.geometry.y -= area.y0;
    }

    let payload = GroupPayload { label, children };
    Entity::new(
        id,
        Geometry::new(area.x0, area.y0, area.width(), area.height()),
        Style::new("transparent", "transparent", 0.0),
        match kind {
            GroupKind::Generic => Payload::GenericGroup(payload),
            GroupKind::Row => Payload::RowGroup(payload),
        },
    )
}

/// Convert a child's geometry from group-local to canvas coordinates
fn release_child(group: &Entity, mut child: Entity) -> Entity {
    let g = &group.geometry;
    let p = to_canvas(g, Point::new(child.geometry.x, child.geometry.y));
    child.geometry.x = p.x;
    child.geometry.y = p.y;
    if !g.is_axis_aligned() {
        child.geometry.rotation += g.rotation;
        child.geometry.scale_x *= g.scale_x;
        child.geometry.scale_y *= g.scale_y;
    }
    child.visible &= group.visible;
    child.locked |= group.locked;
    child
}

impl SceneState {
    /// Group top-level entities.
    ///
    /// Needs at least two distinct ids, all present at the top level. The
    /// group takes the paint position of the topmost child. Returns the new
    /// group id.
    pub fn group(&mut self, ids: &[EntityId], kind: GroupKind, label: Option<String>) -> EditResult<EntityId> {
        let mut indices = Vec::new();
        for id in ids {
            let index = self
                .index_of(id)
                .ok_or_else(|| EditorError::UnknownEntity(id.clone()))?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        if indices.len() < 2 {
            return Err(EditorError::ThresholdNotMet {
                operation: "group",
                required: 2,
                actual: indices.len(),
            });
        }
        indices.sort_unstable();

        let topmost = indices[indices.len() - 1];
        let insert_at = topmost + 1 - indices.len();

        // Remove from the top down so lower indices stay valid
        let mut children: Vec<Entity> = indices
            .iter()
            .rev()
            .map(|&i| self.entities.remove(i))
            .collect();
        children.reverse();

        let group_id = uuid::Uuid::new_v4().to_string();
        let group = make_group(group_id.clone(), kind, label, children);
        self.entities.insert(insert_at, group);
        self.version += 1;
        Ok(group_id)
    }

    /// Dissolve a group back into top-level entities.
    ///
    /// Children take the group's paint position in their stored order.
    /// Returns the released child ids.
    pub fn ungroup(&mut self, id: &str) -> EditResult<Vec<EntityId>> {
        let index = self
            .index_of(id)
            .ok_or_else(|| EditorError::UnknownEntity(id.to_string()))?;
        if !self.entities[index].is_group() {
            return Err(EditorError::InvalidGroupTarget(id.to_string()));
        }

        let mut group = self.entities.remove(index);
        let children = group
            .payload
            .group_mut()
            .map(|g| std::mem::take(&mut g.children))
            .unwrap_or_default();

        let mut released = Vec::with_capacity(children.len());
        for (offset, child) in children.into_iter().enumerate() {
            released.push(child.id.clone());
            self.entities.insert(index + offset, release_child(&group, child));
        }
        self.version += 1;
        Ok(released)
    }
}
