//! Seat category registry
//!
//! Seats store only a category id; color and default price are looked up
//! here whenever they are needed, so a category edit is visible on every
//! seat immediately.

use shared::{CategoryPatch, SeatCategory};

use crate::error::{EditResult, EditorError};

/// Ordered list of seat categories, never empty
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<SeatCategory>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: vec![
                SeatCategory::new("vip", "VIP Class", "#F59E0B", 35.0)
                    .with_description("Premium seating with best view"),
                SeatCategory::new("class-a", "Class A", "#06B6D4", 25.0)
                    .with_description("Great seats with good view"),
                SeatCategory::new("class-b", "Class B", "#EC4899", 15.0)
                    .with_description("Standard seating"),
            ],
        }
    }
}

impl CategoryRegistry {
    /// Registry holding a single category
    pub fn with_category(category: SeatCategory) -> Self {
        Self {
            categories: vec![category],
        }
    }

    pub fn all(&self) -> &[SeatCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SeatCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Fallback for unknown ids: the first category
    pub fn default_category(&self) -> &SeatCategory {
        &self.categories[0]
    }

    /// Category for `id`, or the default category when it is unknown
    pub fn resolve(&self, id: &str) -> &SeatCategory {
        self.get(id).unwrap_or_else(|| self.default_category())
    }

    /// Append a category; ids must be unique
    pub fn add(&mut self, category: SeatCategory) -> EditResult {
        if self.get(&category.id).is_some() {
            return Err(EditorError::DuplicateCategory(category.id));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Merge fields into an existing category
    pub fn update(&mut self, id: &str, patch: &CategoryPatch) -> EditResult {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EditorError::UnknownCategory(id.to_string()))?;
        patch.apply(category);
        Ok(())
    }

    /// Remove a category. The last remaining category cannot be deleted.
    pub fn delete(&mut self, id: &str) -> EditResult<SeatCategory> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EditorError::UnknownCategory(id.to_string()))?;
        if self.categories.len() == 1 {
            return Err(EditorError::LastCategory(id.to_string()));
        }
        Ok(self.categories.remove(index))
    }
}
