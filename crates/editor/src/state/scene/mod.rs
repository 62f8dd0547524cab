//! Scene state management
//!
//! The scene is the ordered list of top-level entities. The end of the list
//! is the topmost paint layer. Group children live inside their group's
//! payload and are not part of the top-level list.

mod display;
mod entity_ops;
mod grouping;
mod order_ops;
mod persistence;

pub use display::{entity_display_name, short_id};
pub use grouping::{make_group, GroupKind};
pub use order_ops::ZOrder;

use shared::{Entity, EntityId};

/// Ordered collection of placed entities
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    pub(crate) entities: Vec<Entity>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Bump version after an in-place edit
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Top-level entity by id
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Mutable top-level entity by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Paint-order index of a top-level entity
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// All top-level entities, bottom to top
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// Visible top-level entities, bottom to top
    pub fn all_visible(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.visible)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity at any depth, including group children (read-only)
    pub fn find_nested(&self, id: &str) -> Option<&Entity> {
        fn search<'a>(entities: &'a [Entity], id: &str) -> Option<&'a Entity> {
            for e in entities {
                if e.id == id {
                    return Some(e);
                }
                if let Some(found) = search(e.children(), id) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.entities, id)
    }

    /// Visit every entity at every depth
    pub fn visit(&self, f: &mut impl FnMut(&Entity)) {
        for e in &self.entities {
            e.visit(f);
        }
    }

    /// Mutable references to the given top-level entities, in `ids` order.
    ///
    /// Unknown ids are skipped.
    pub fn pick_mut(&mut self, ids: &[EntityId]) -> Vec<&mut Entity> {
        let mut picked: Vec<(usize, &mut Entity)> = self
            .entities
            .iter_mut()
            .filter_map(|e| ids.iter().position(|id| *id == e.id).map(|rank| (rank, e)))
            .collect();
        picked.sort_by_key(|(rank, _)| *rank);
        picked.into_iter().map(|(_, e)| e).collect()
    }
}
