//! Snapshot serialization
//!
//! The snapshot is the JSON document `{"objects": [...]}`. It is the
//! load/save contract and the undo/redo storage format.

use std::collections::HashSet;

use serde::Serialize;
use shared::{Entity, SceneSnapshot};

use super::SceneState;
use crate::error::{EditResult, EditorError};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    objects: &'a [Entity],
}

impl SceneState {
    /// Serialize the whole entity list
    pub fn serialize(&self) -> String {
        // Entities hold only strings, numbers and bools, so encoding cannot fail
        serde_json::to_string(&SnapshotRef {
            objects: &self.entities,
        })
        .unwrap_or_default()
    }

    /// Replace the entity list from a snapshot.
    ///
    /// Either the whole snapshot loads or the scene is left untouched.
    pub fn deserialize(&mut self, snapshot: &str) -> EditResult {
        let parsed = parse_snapshot(snapshot)?;
        self.entities = parsed.objects;
        self.version += 1;
        Ok(())
    }
}

/// Decode and validate a snapshot without touching any scene
pub fn parse_snapshot(snapshot: &str) -> EditResult<SceneSnapshot> {
    let parsed: SceneSnapshot = serde_json::from_str(snapshot)?;

    let mut seen = HashSet::new();
    let mut duplicate = None;
    for entity in &parsed.objects {
        entity.visit(&mut |e| {
            if !seen.insert(e.id.clone()) && duplicate.is_none() {
                duplicate = Some(e.id.clone());
            }
        });
    }
    if let Some(id) = duplicate {
        return Err(EditorError::Deserialization(format!("duplicate entity id {id}")));
    }
    Ok(parsed)
}
