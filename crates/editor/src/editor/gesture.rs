//! Continuous pointer gestures (drag, rotate, resize).
//!
//! A gesture mutates the scene freely while it runs and produces exactly one
//! history entry when it ends. Aborting restores the scene as it was when
//! the gesture began.

use shared::{EntityId, Geometry, GeometryPatch};

use super::Editor;
use crate::error::{EditResult, EditorError};
use crate::layout::snap_point;

/// In-flight gesture state
#[derive(Debug, Clone)]
pub struct Gesture {
    start_snapshot: String,
    origins: Vec<(EntityId, Geometry)>,
}

impl Gesture {
    /// Ids the gesture acts on
    pub fn targets(&self) -> impl Iterator<Item = &EntityId> {
        self.origins.iter().map(|(id, _)| id)
    }
}

impl Editor {
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a gesture on the unlocked part of the selection
    pub fn begin_gesture(&mut self) -> EditResult {
        self.abort_gesture();
        let origins: Vec<(EntityId, Geometry)> = self
            .selected_entities()
            .into_iter()
            .filter(|e| !e.locked)
            .map(|e| (e.id.clone(), e.geometry.clone()))
            .collect();
        if origins.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        self.gesture = Some(Gesture {
            start_snapshot: self.scene.serialize(),
            origins,
        });
        Ok(())
    }

    /// Drag by a total offset measured from where the gesture began
    pub fn gesture_move(&mut self, dx: f64, dy: f64) -> EditResult {
        let grid = self.settings.snap_grid();
        self.with_origins(|entity, origin| {
            let (x, y) = (origin.x + dx, origin.y + dy);
            let (x, y) = match grid {
                Some(grid) => snap_point(x, y, grid),
                None => (x, y),
            };
            entity.x = x;
            entity.y = y;
        })
    }

    /// Rotate by a total degree delta measured from where the gesture began
    pub fn gesture_rotate(&mut self, delta_degrees: f64) -> EditResult {
        self.with_origins(|entity, origin| {
            entity.rotation = origin.rotation + delta_degrees;
        })
    }

    /// Apply a geometry patch to one gesture target (resize handles)
    pub fn gesture_patch(&mut self, id: &str, patch: &GeometryPatch) -> EditResult {
        let gesture = self.gesture.as_ref().ok_or(EditorError::NothingSelected)?;
        if !gesture.targets().any(|t| t == id) {
            return Err(EditorError::UnknownEntity(id.to_string()));
        }
        let entity = self
            .scene
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownEntity(id.to_string()))?;
        if patch.apply(&mut entity.geometry) {
            self.scene.notify_mutated();
        }
        Ok(())
    }

    /// Finish the gesture; returns whether a history entry was recorded
    pub fn end_gesture(&mut self) -> bool {
        if self.gesture.take().is_none() {
            return false;
        }
        self.settle()
    }

    /// Drop the gesture and restore the scene it started from
    pub fn abort_gesture(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if let Err(e) = self.scene.deserialize(&gesture.start_snapshot) {
            tracing::error!("Failed to restore scene after aborted gesture: {e}");
        }
        self.selection.prune(&self.scene);
    }

    fn with_origins(&mut self, mut apply: impl FnMut(&mut Geometry, &Geometry)) -> EditResult {
        let gesture = self.gesture.as_ref().ok_or(EditorError::NothingSelected)?;
        let mut changed = false;
        for (id, origin) in &gesture.origins {
            if let Some(entity) = self.scene.entities.iter_mut().find(|e| &e.id == id) {
                let before = entity.geometry.clone();
                apply(&mut entity.geometry, origin);
                changed |= before != entity.geometry;
            }
        }
        if changed {
            self.scene.notify_mutated();
        }
        Ok(())
    }
}
