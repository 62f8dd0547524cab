use crate::error::{EditResult, EditorError};
use crate::layout::{self, Alignment, CanvasAxis, DistributeAxis};
use crate::state::scene::ZOrder;

use super::Editor;

impl Editor {
    /// Align the selection to its first (anchor) item
    pub fn align(&mut self, alignment: Alignment) -> EditResult<bool> {
        self.abort_gesture();
        let ids = self.selection.all().to_vec();
        let changed = layout::align(&mut self.scene.pick_mut(&ids), alignment)?;
        Ok(self.finish_arrange(changed))
    }

    /// Space the selection evenly between its outermost items
    pub fn distribute(&mut self, axis: DistributeAxis) -> EditResult<bool> {
        self.abort_gesture();
        let ids = self.selection.all().to_vec();
        let changed = layout::distribute(&mut self.scene.pick_mut(&ids), axis)?;
        Ok(self.finish_arrange(changed))
    }

    /// Center each selected item on the canvas
    pub fn center_on_canvas(&mut self, axis: CanvasAxis) -> EditResult<bool> {
        self.abort_gesture();
        let ids = self.selection.all().to_vec();
        let (width, height) = (self.settings.canvas.width, self.settings.canvas.height);
        let changed = layout::center_on_canvas(&mut self.scene.pick_mut(&ids), axis, width, height)?;
        Ok(self.finish_arrange(changed))
    }

    /// Add a degree delta to every unlocked selected item
    pub fn rotate_selected(&mut self, delta_degrees: f64) -> EditResult<bool> {
        self.abort_gesture();
        if self.selection.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        let ids = self.selection.all().to_vec();
        let changed = layout::rotate_by(&mut self.scene.pick_mut(&ids), delta_degrees);
        Ok(self.finish_arrange(changed))
    }

    /// Move the selection in paint order, one item at a time in selection order
    pub fn reorder(&mut self, direction: ZOrder) -> EditResult<bool> {
        self.abort_gesture();
        if self.selection.is_empty() {
            return Err(EditorError::NothingSelected);
        }
        let ids = self.selection.all().to_vec();
        let mut changed = false;
        for id in &ids {
            changed |= self.scene.reorder(id, direction);
        }
        if changed {
            self.commit();
        }
        Ok(changed)
    }

    fn finish_arrange(&mut self, changed: bool) -> bool {
        if changed {
            self.scene.notify_mutated();
            self.commit();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::editor::Editor;
    use crate::error::EditorError;
    use crate::fixtures::{seat_at, stage_at};
    use crate::layout::{Alignment, CanvasAxis, DistributeAxis};
    use crate::state::scene::ZOrder;
    use crate::state::selection::SelectMode;

    fn editor_with(entities: Vec<shared::Entity>) -> Editor {
        let mut e = Editor::new();
        let mut ids = Vec::new();
        for entity in entities {
            ids.push(e.add_entity(entity).unwrap());
        }
        e.select(&ids, SelectMode::Replace);
        e
    }

    fn x_of(e: &Editor, id: &str) -> f64 {
        e.scene().get(id).unwrap().geometry.x
    }

    #[test]
    fn test_align_left_commits_once() {
        let mut e = editor_with(vec![
            seat_at("a", 100.0, 0.0),
            seat_at("b", 300.0, 50.0),
            seat_at("c", 200.0, 90.0),
        ]);
        let len = e.history().len();
        assert!(e.align(Alignment::Left).unwrap());
        assert_eq!(e.history().len(), len + 1);
        for id in ["a", "b", "c"] {
            assert_eq!(x_of(&e, id), 100.0);
        }
        assert!(!e.align(Alignment::Left).unwrap());
        assert_eq!(e.history().len(), len + 1);
    }

    #[test]
    fn test_align_single_is_rejected_silently() {
        let mut e = editor_with(vec![seat_at("a", 100.0, 0.0)]);
        let err = e.align(Alignment::Left).unwrap_err();
        assert!(err.is_silent());
    }

    #[test]
    fn test_distribute_horizontal() {
        let mut e = editor_with(vec![
            seat_at("a", 0.0, 0.0),
            seat_at("b", 10.0, 0.0),
            seat_at("c", 200.0, 0.0),
        ]);
        assert!(e.distribute(DistributeAxis::Horizontal).unwrap());
        assert_eq!(x_of(&e, "a"), 0.0);
        assert_eq!(x_of(&e, "b"), 100.0);
        assert_eq!(x_of(&e, "c"), 200.0);
    }

    #[test]
    fn test_center_on_canvas_uses_settings() {
        let mut e = editor_with(vec![stage_at("s", 0.0, 0.0)]);
        e.center_on_canvas(CanvasAxis::Both).unwrap();
        let g = &e.scene().get("s").unwrap().geometry;
        assert_eq!(g.x, (1200.0 - 300.0) / 2.0);
        assert_eq!(g.y, (800.0 - 80.0) / 2.0);
    }

    #[test]
    fn test_reorder_selection() {
        let mut e = editor_with(vec![seat_at("a", 0.0, 0.0), seat_at("b", 0.0, 0.0)]);
        e.select(&["a".to_string()], SelectMode::Replace);
        assert!(e.reorder(ZOrder::ToFront).unwrap());
        let order: Vec<&str> = e.scene().all().iter().map(|x| x.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert!(!e.reorder(ZOrder::ToFront).unwrap());
    }

    #[test]
    fn test_rotate_needs_selection() {
        let mut e = editor_with(vec![seat_at("a", 0.0, 0.0)]);
        assert!(e.rotate_selected(15.0).unwrap());
        assert_eq!(e.scene().get("a").unwrap().geometry.rotation, 15.0);
        e.clear_selection();
        assert!(matches!(e.rotate_selected(15.0), Err(EditorError::NothingSelected)));
    }
}
