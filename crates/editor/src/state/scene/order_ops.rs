//! Z-order operations

use serde::{Deserialize, Serialize};

use super::SceneState;

/// Direction for moving an entity through the paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZOrder {
    /// Topmost
    ToFront,
    /// Bottommost
    ToBack,
    /// One step up
    Forward,
    /// One step down
    Backward,
}

impl SceneState {
    /// Move an entity within the paint order.
    ///
    /// Returns whether the order changed; unknown ids and moves past the
    /// boundary are no-ops.
    pub fn reorder(&mut self, id: &str, direction: ZOrder) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let last = self.entities.len() - 1;

        let target = match direction {
            ZOrder::ToFront => last,
            ZOrder::ToBack => 0,
            ZOrder::Forward => (index + 1).min(last),
            ZOrder::Backward => index.saturating_sub(1),
        };
        if target == index {
            return false;
        }

        match direction {
            ZOrder::Forward | ZOrder::Backward => self.entities.swap(index, target),
            ZOrder::ToFront | ZOrder::ToBack => {
                let entity = self.entities.remove(index);
                self.entities.insert(target, entity);
            }
        }
        self.version += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{scene_of, seat_at};

    fn order(scene: &SceneState) -> Vec<&str> {
        scene.all().iter().map(|e| e.id.as_str()).collect()
    }

    fn abcd() -> SceneState {
        scene_of(
            ["a", "b", "c", "d"]
                .iter()
                .map(|id| seat_at(id, 0.0, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_to_front_and_back() {
        let mut scene = abcd();
        assert!(scene.reorder("b", ZOrder::ToFront));
        assert_eq!(order(&scene), vec!["a", "c", "d", "b"]);
        assert!(scene.reorder("d", ZOrder::ToBack));
        assert_eq!(order(&scene), vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_forward_backward_swap_neighbors() {
        let mut scene = abcd();
        assert!(scene.reorder("b", ZOrder::Forward));
        assert_eq!(order(&scene), vec!["a", "c", "b", "d"]);
        assert!(scene.reorder("b", ZOrder::Backward));
        assert_eq!(order(&scene), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut scene = abcd();
        let version = scene.version();
        assert!(!scene.reorder("d", ZOrder::Forward));
        assert!(!scene.reorder("d", ZOrder::ToFront));
        assert!(!scene.reorder("a", ZOrder::Backward));
        assert!(!scene.reorder("a", ZOrder::ToBack));
        assert!(!scene.reorder("missing", ZOrder::ToFront));
        assert_eq!(scene.version(), version);
    }
}
