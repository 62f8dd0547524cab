use serde::{Deserialize, Serialize};
use shared::{EntityId, EntityKind};

use super::scene::SceneState;

/// How `select` combines the given ids with the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Selection becomes exactly the given ids
    #[default]
    Replace,
    /// Flip membership of each id (Ctrl+click behavior)
    Toggle,
    /// Union with the current selection (Shift+click behavior)
    Add,
}

/// What the property inspector should show for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "kind", rename_all = "snake_case")]
pub enum InspectorMode {
    None,
    Single(EntityKind),
    Mixed,
}

/// Entity selection state (supports multi-select)
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    /// Selected entity IDs (in order of selection)
    selected: Vec<EntityId>,
}

impl SelectionState {
    /// Primary (first) selected entity; the anchor for alignment
    pub fn primary(&self) -> Option<&EntityId> {
        self.selected.first()
    }

    /// All selected entities
    pub fn all(&self) -> &[EntityId] {
        &self.selected
    }

    /// Check if an entity is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Number of selected entities
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Change the selection. Ids not in the scene are ignored.
    pub fn select(&mut self, ids: &[EntityId], mode: SelectMode, scene: &SceneState) {
        if mode == SelectMode::Replace {
            self.selected.clear();
        }
        for id in ids.iter().filter(|id| scene.contains(id)) {
            let position = self.selected.iter().position(|s| s == id);
            match (mode, position) {
                (SelectMode::Toggle, Some(pos)) => {
                    self.selected.remove(pos);
                }
                (_, None) => self.selected.push(id.clone()),
                (_, Some(_)) => {}
            }
        }
    }

    /// Select a single entity (clears previous selection)
    pub fn select_one(&mut self, id: EntityId, scene: &SceneState) {
        self.select(std::slice::from_ref(&id), SelectMode::Replace, scene);
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop ids that are no longer top-level entities.
    ///
    /// Returns whether anything was dropped.
    pub fn prune(&mut self, scene: &SceneState) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| scene.contains(id));
        before != self.selected.len()
    }

    /// Single kind shared by every selected entity, or `Mixed`
    pub fn homogeneous_kind(&self, scene: &SceneState) -> InspectorMode {
        let mut kinds = self.selected.iter().filter_map(|id| scene.get(id)).map(|e| e.kind());
        let Some(first) = kinds.next() else {
            return InspectorMode::None;
        };
        if kinds.all(|k| k == first) {
            InspectorMode::Single(first)
        } else {
            InspectorMode::Mixed
        }
    }
}
