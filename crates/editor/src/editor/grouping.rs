use shared::EntityId;

use super::Editor;
use crate::error::{EditResult, EditorError};
use crate::state::scene::GroupKind;
use crate::state::selection::SelectMode;

impl Editor {
    /// Group the selection into a generic group
    pub fn group(&mut self) -> EditResult<EntityId> {
        self.group_selection(GroupKind::Generic, None)
    }

    /// Group the selection into a labelled row
    pub fn group_as_row(&mut self, label: impl Into<String>) -> EditResult<EntityId> {
        self.group_selection(GroupKind::Row, Some(label.into()))
    }

    /// Dissolve a group; its children become the selection
    pub fn ungroup(&mut self, id: &str) -> EditResult<Vec<EntityId>> {
        self.abort_gesture();
        let released = self.scene.ungroup(id)?;
        self.selection.select(&released, SelectMode::Replace, &self.scene);
        self.settle();
        tracing::debug!("Ungrouped {id} into {} entities", released.len());
        Ok(released)
    }

    /// Dissolve every selected group, all or nothing
    pub fn ungroup_selected(&mut self) -> EditResult<Vec<EntityId>> {
        self.abort_gesture();
        let groups: Vec<EntityId> = self
            .selected_entities()
            .into_iter()
            .filter(|e| e.is_group())
            .map(|e| e.id.clone())
            .collect();
        if groups.is_empty() {
            return Err(match self.selection.primary() {
                Some(id) => EditorError::InvalidGroupTarget(id.clone()),
                None => EditorError::NothingSelected,
            });
        }

        let mut scene = self.scene.clone();
        let mut released = Vec::new();
        for id in &groups {
            released.extend(scene.ungroup(id)?);
        }
        self.scene = scene;
        self.selection.select(&released, SelectMode::Replace, &self.scene);
        self.settle();
        Ok(released)
    }

    fn group_selection(&mut self, kind: GroupKind, label: Option<String>) -> EditResult<EntityId> {
        self.abort_gesture();
        let ids = self.selection.all().to_vec();
        let group_id = self.scene.group(&ids, kind, label)?;
        self.selection.select_one(group_id.clone(), &self.scene);
        self.settle();
        tracing::debug!("Grouped {} entities into {group_id}", ids.len());
        Ok(group_id)
    }
}
