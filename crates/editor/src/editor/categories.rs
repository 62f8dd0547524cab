use shared::{CategoryPatch, Payload, SeatCategory};

use super::Editor;
use crate::error::{EditResult, EditorError};

impl Editor {
    /// Register a new seat category
    pub fn add_category(&mut self, category: SeatCategory) -> EditResult {
        let id = category.id.clone();
        self.categories.add(category)?;
        tracing::info!("Added seat category {id}");
        Ok(())
    }

    /// Edit a category. Seats pick the change up through the registry, so
    /// the scene itself is untouched and no history entry is recorded.
    pub fn update_category(&mut self, id: &str, patch: &CategoryPatch) -> EditResult {
        self.categories.update(id, patch)?;
        self.scene.notify_mutated();
        Ok(())
    }

    /// Delete a category and move its seats to the default category.
    ///
    /// Returns the number of reassigned seats.
    pub fn delete_category(&mut self, id: &str) -> EditResult<usize> {
        self.abort_gesture();
        if let Err(e) = self.categories.delete(id) {
            if matches!(e, EditorError::LastCategory(_)) {
                tracing::warn!("Refusing to delete the last seat category ({id})");
            }
            return Err(e);
        }

        let fallback = self.categories.default_category().id.clone();
        let mut reassigned = 0;
        for entity in &mut self.scene.entities {
            entity.visit_mut(&mut |e| {
                if let Payload::Seat(seat) = &mut e.payload {
                    if seat.category_id == id {
                        seat.category_id = fallback.clone();
                        reassigned += 1;
                    }
                }
            });
        }
        if reassigned > 0 {
            self.scene.notify_mutated();
        }
        self.commit();
        tracing::info!("Deleted seat category {id}, {reassigned} seats moved to {fallback}");
        Ok(reassigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{group_of, seat_with};
    use crate::state::categories::CategoryRegistry;
    use crate::state::settings::EditorSettings;

    fn seat_in(id: &str, category: &str) -> shared::Entity {
        seat_with(id, category, true, None)
    }

    #[test]
    fn test_delete_cascades_into_groups() {
        let mut e = Editor::new();
        e.add_entity(seat_in("a", "class-a")).unwrap();
        e.add_entity(group_of("g", vec![seat_in("b", "class-a"), seat_in("c", "class-b")]))
            .unwrap();
        let len = e.history().len();

        assert_eq!(e.delete_category("class-a").unwrap(), 2);
        assert_eq!(e.history().len(), len + 1);
        assert_eq!(e.scene().get("a").unwrap().seat().unwrap().category_id, "vip");
        let nested = e.scene().find_nested("b").unwrap();
        assert_eq!(nested.seat().unwrap().category_id, "vip");
        let untouched = e.scene().find_nested("c").unwrap();
        assert_eq!(untouched.seat().unwrap().category_id, "class-b");
    }

    #[test]
    fn test_last_category_is_kept() {
        let registry = CategoryRegistry::with_category(SeatCategory::new("only", "Only", "#000000", 1.0));
        let mut e = Editor::with_parts(EditorSettings::default(), registry);
        let err = e.delete_category("only").unwrap_err();
        assert!(matches!(err, EditorError::LastCategory(_)));
        assert!(!err.is_silent());
        assert_eq!(e.categories().len(), 1);
    }

    #[test]
    fn test_update_category_does_not_commit() {
        let mut e = Editor::new();
        let len = e.history().len();
        e.update_category(
            "class-b",
            &CategoryPatch {
                price: Some(12.5),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(e.categories().get("class-b").unwrap().price, 12.5);
        assert_eq!(e.history().len(), len);
        assert!(e.update_category("nope", &CategoryPatch::default()).is_err());
    }

    #[test]
    fn test_add_duplicate_category() {
        let mut e = Editor::new();
        let err = e
            .add_category(SeatCategory::new("vip", "Again", "#111111", 1.0))
            .unwrap_err();
        assert!(matches!(err, EditorError::DuplicateCategory(_)));
        e.add_category(SeatCategory::new("balcony", "Balcony", "#111111", 10.0))
            .unwrap();
        assert_eq!(e.categories().len(), 4);
    }
}
