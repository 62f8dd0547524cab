//! Entity add/remove/update operations

use shared::{Entity, EntityId, EntityPatch};

use super::SceneState;
use crate::error::{EditResult, EditorError};

impl SceneState {
    /// Append an entity on top of the paint order
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
        self.version += 1;
    }

    /// Insert an entity at a paint-order index (clamped to the end)
    pub fn insert_entity(&mut self, index: usize, entity: Entity) {
        let index = index.min(self.entities.len());
        self.entities.insert(index, entity);
        self.version += 1;
    }

    /// Remove an entity; unknown ids are a no-op
    pub fn remove_entity(&mut self, id: &str) -> Option<Entity> {
        let index = self.index_of(id)?;
        self.version += 1;
        Some(self.entities.remove(index))
    }

    /// Remove several entities, returning the ids actually removed
    pub fn remove_entities(&mut self, ids: &[EntityId]) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.entities.retain(|e| {
            if ids.contains(&e.id) {
                removed.push(e.id.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.version += 1;
        }
        removed
    }

    /// Merge a partial update into an entity.
    ///
    /// Returns whether anything changed. A payload of another kind, or a
    /// payload patch on a group, is rejected without touching the entity.
    pub fn update_entity(&mut self, id: &str, patch: &EntityPatch) -> EditResult<bool> {
        let entity = self
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownEntity(id.to_string()))?;

        if let Some(payload) = &patch.payload {
            if payload.kind() != entity.kind() || entity.is_group() {
                return Err(EditorError::KindMismatch {
                    entity: entity.kind().as_str(),
                    patch: payload.kind().as_str(),
                });
            }
        }

        let mut changed = false;
        if let Some(geometry) = &patch.geometry {
            changed |= geometry.apply(&mut entity.geometry);
        }
        if let Some(style) = &patch.style {
            changed |= style.apply(&mut entity.style);
        }
        if let Some(visible) = patch.visible {
            changed |= entity.visible != visible;
            entity.visible = visible;
        }
        if let Some(locked) = patch.locked {
            changed |= entity.locked != locked;
            entity.locked = locked;
        }
        if let Some(payload) = &patch.payload {
            changed |= entity.payload != *payload;
            entity.payload = payload.clone();
        }

        if changed {
            self.version += 1;
        }
        Ok(changed)
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.entities.clear();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{scene_of, seat_at, stage_at};
    use shared::{GeometryPatch, Payload, StagePayload, StylePatch};

    #[test]
    fn test_add_appends_on_top() {
        let mut scene = SceneState::default();
        scene.add_entity(seat_at("a", 0.0, 0.0));
        scene.add_entity(seat_at("b", 0.0, 0.0));
        assert_eq!(scene.all().last().unwrap().id, "b");
        assert_eq!(scene.version(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut scene = scene_of(vec![seat_at("a", 0.0, 0.0)]);
        let version = scene.version();
        assert!(scene.remove_entity("nope").is_none());
        assert!(scene.remove_entities(&["nope".to_string()]).is_empty());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.version(), version);
    }

    #[test]
    fn test_remove_entities() {
        let mut scene = scene_of(vec![
            seat_at("a", 0.0, 0.0),
            seat_at("b", 0.0, 0.0),
            seat_at("c", 0.0, 0.0),
        ]);
        let removed = scene.remove_entities(&["c".to_string(), "a".to_string()]);
        assert_eq!(removed, vec!["a", "c"]);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut scene = scene_of(vec![seat_at("a", 0.0, 0.0)]);
        let patch = EntityPatch {
            geometry: Some(GeometryPatch::position(10.0, 20.0)),
            style: Some(StylePatch {
                opacity: Some(0.5),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(scene.update_entity("a", &patch).unwrap());
        let a = scene.get("a").unwrap();
        assert_eq!((a.geometry.x, a.geometry.y), (10.0, 20.0));
        assert_eq!(a.geometry.width, 24.0);
        assert_eq!(a.style.opacity, 0.5);

        assert!(!scene.update_entity("a", &patch).unwrap());
    }

    #[test]
    fn test_update_unknown_id() {
        let mut scene = SceneState::default();
        let err = scene.update_entity("x", &EntityPatch::default()).unwrap_err();
        assert!(matches!(err, EditorError::UnknownEntity(_)));
    }

    #[test]
    fn test_update_rejects_kind_change() {
        let mut scene = scene_of(vec![seat_at("a", 0.0, 0.0), stage_at("s", 0.0, 0.0)]);
        let patch = EntityPatch::payload(Payload::Stage(StagePayload {
            label: "MAIN".into(),
        }));
        assert!(scene.update_entity("a", &patch).is_err());
        assert!(scene.get("a").unwrap().seat().is_some());

        assert!(scene.update_entity("s", &patch).unwrap());
        assert_eq!(scene.get("s").unwrap().label(), Some("MAIN"));
    }
}
