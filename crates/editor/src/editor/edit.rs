//! Entity and selection commands

use std::collections::HashSet;

use shared::{Entity, EntityId, EntityKind, EntityPatch};

use super::Editor;
use crate::error::{EditResult, EditorError};
use crate::layout::rows::{self, RowLayout};
use crate::layout::snap_point;
use crate::state::selection::SelectMode;
use crate::templates::{self, Tool};

impl Editor {
    // ── Creation ──────────────────────────────────────────────

    /// Add an entity on top of the scene and select it.
    ///
    /// Any id in the entity tree that is empty, already used in the scene or
    /// repeated inside the tree is replaced by a fresh one. Returns the id
    /// the entity was stored under.
    pub fn add_entity(&mut self, mut entity: Entity) -> EditResult<EntityId> {
        self.abort_gesture();
        let mut taken = HashSet::new();
        self.scene.visit(&mut |e| {
            taken.insert(e.id.clone());
        });
        let mut remapped = 0;
        entity.visit_mut(&mut |e| {
            if e.id.is_empty() || taken.contains(&e.id) {
                e.id = uuid::Uuid::new_v4().to_string();
                remapped += 1;
            }
            taken.insert(e.id.clone());
        });
        if remapped > 0 {
            tracing::debug!("Assigned {remapped} fresh ids to clashing entities");
        }
        let id = entity.id.clone();
        self.scene.add_entity(entity);
        self.selection.select_one(id.clone(), &self.scene);
        self.settle();
        Ok(id)
    }

    /// Place a new entity with a placement tool at a canvas point.
    ///
    /// The point snaps to the grid when snapping is enabled. Seats get the
    /// next free number and the default category.
    pub fn place(&mut self, tool: Tool, x: f64, y: f64) -> EditResult<EntityId> {
        let (x, y) = match self.settings.snap_grid() {
            Some(grid) => snap_point(x, y, grid),
            None => (x, y),
        };
        let entity = match tool {
            Tool::Select => return Err(EditorError::NothingSelected),
            Tool::Seat => {
                let label = (self.count_kind(EntityKind::Seat) + 1).to_string();
                let category = self.categories.default_category().id.clone();
                templates::seat(x, y, &label, &category)
            }
            Tool::Stage => templates::stage(x, y),
            Tool::Door => templates::door(x, y),
            Tool::Text => templates::text(x, y, "Text"),
            Tool::Wall => templates::wall(x, y),
        };
        tracing::debug!("Placing {} at ({x}, {y})", entity.kind().as_str());
        self.add_entity(entity)
    }

    /// Generate a block of seat rows and select the result
    pub fn generate_rows(&mut self, layout: &RowLayout) -> EditResult<Vec<EntityId>> {
        self.abort_gesture();
        let category = match &layout.category_id {
            Some(id) => self
                .categories
                .get(id)
                .ok_or_else(|| EditorError::UnknownCategory(id.clone()))?
                .id
                .clone(),
            None => self.categories.default_category().id.clone(),
        };

        let generated = rows::generate(layout, &category);
        if generated.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<EntityId> = generated.iter().map(|e| e.id.clone()).collect();
        for entity in generated {
            self.scene.add_entity(entity);
        }
        self.selection.select(&ids, SelectMode::Replace, &self.scene);
        self.settle();
        tracing::info!(
            "Generated {} rows with {} seats each ({} total seats)",
            layout.rows,
            layout.seats_per_row,
            layout.seat_count()
        );
        Ok(ids)
    }

    /// Copy the selection with fresh ids, offset by the duplicate offset.
    ///
    /// The copies go on top and become the selection.
    pub fn duplicate_selected(&mut self) -> EditResult<Vec<EntityId>> {
        self.abort_gesture();
        if self.selection.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        let offset = self.settings.duplicate_offset;
        let copies: Vec<Entity> = self
            .selected_entities()
            .into_iter()
            .map(|e| {
                let mut copy = templates::clone_with_new_ids(e);
                copy.geometry.x += offset;
                copy.geometry.y += offset;
                copy
            })
            .collect();

        let ids: Vec<EntityId> = copies.iter().map(|e| e.id.clone()).collect();
        for copy in copies {
            self.scene.add_entity(copy);
        }
        self.selection.select(&ids, SelectMode::Replace, &self.scene);
        self.settle();
        Ok(ids)
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Merge a partial update into an entity; returns whether it changed.
    ///
    /// Hiding or locking an entity drops it from the selection.
    pub fn update_entity(&mut self, id: &str, patch: &EntityPatch) -> EditResult<bool> {
        self.abort_gesture();
        let changed = self.scene.update_entity(id, patch)?;
        if patch.visible == Some(false) || patch.locked == Some(true) {
            self.deselect(id);
        }
        if changed {
            self.settle();
        }
        Ok(changed)
    }

    /// Show or hide an entity
    pub fn set_visible(&mut self, id: &str, visible: bool) -> EditResult<bool> {
        self.update_entity(
            id,
            &EntityPatch {
                visible: Some(visible),
                ..Default::default()
            },
        )
    }

    /// Lock or unlock an entity
    pub fn set_locked(&mut self, id: &str, locked: bool) -> EditResult<bool> {
        self.update_entity(
            id,
            &EntityPatch {
                locked: Some(locked),
                ..Default::default()
            },
        )
    }

    /// Delete the selected entities; returns the removed ids
    pub fn remove_selected(&mut self) -> EditResult<Vec<EntityId>> {
        self.abort_gesture();
        if self.selection.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        let ids = self.selection.all().to_vec();
        let removed = self.scene.remove_entities(&ids);
        self.selection.clear();
        self.settle();
        Ok(removed)
    }

    /// Delete entities by id; unknown ids are ignored
    pub fn remove_entities(&mut self, ids: &[EntityId]) -> Vec<EntityId> {
        self.abort_gesture();
        let removed = self.scene.remove_entities(ids);
        if !removed.is_empty() {
            self.settle();
        }
        removed
    }

    // ── Selection ─────────────────────────────────────────────

    /// Change the selection; ids not in the scene are ignored
    pub fn select(&mut self, ids: &[EntityId], mode: SelectMode) {
        self.selection.select(ids, mode, &self.scene);
    }

    /// Pointer-driven selection: hidden and locked entities cannot be picked
    pub fn pick(&mut self, ids: &[EntityId], mode: SelectMode) {
        let pickable: Vec<EntityId> = ids
            .iter()
            .filter(|id| {
                self.scene
                    .get(id)
                    .is_some_and(|e| e.visible && !e.locked)
            })
            .cloned()
            .collect();
        self.selection.select(&pickable, mode, &self.scene);
    }

    /// Select every visible, unlocked top-level entity
    pub fn select_all(&mut self) {
        let ids: Vec<EntityId> = self
            .scene
            .all_visible()
            .filter(|e| !e.locked)
            .map(|e| e.id.clone())
            .collect();
        self.selection.select(&ids, SelectMode::Replace, &self.scene);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Escape: drop the selection, abort any gesture and return to the
    /// select tool. Never commits.
    pub fn cancel(&mut self) {
        self.abort_gesture();
        self.selection.clear();
        self.tool = Tool::Select;
    }

    fn deselect(&mut self, id: &str) {
        if self.selection.is_selected(id) {
            let ids = [id.to_string()];
            self.selection.select(&ids, SelectMode::Toggle, &self.scene);
        }
    }

    fn count_kind(&self, kind: EntityKind) -> usize {
        let mut count = 0;
        self.scene.visit(&mut |e| {
            if e.kind() == kind {
                count += 1;
            }
        });
        count
    }
}
