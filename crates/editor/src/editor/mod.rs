//! Editor: the state container driving the command API.
//!
//! Owns the scene, selection, categories and history. Every command runs to
//! completion with exclusive access (`&mut self`); the rendering layer only
//! reads state through the accessors and issues commands.

mod arrange;
mod categories;
mod edit;
mod gesture;
mod grouping;

pub use gesture::Gesture;

use shared::{Entity, Payload};

use crate::error::EditResult;
use crate::state::categories::CategoryRegistry;
use crate::state::history::HistoryLog;
use crate::state::scene::SceneState;
use crate::state::selection::{InspectorMode, SelectionState};
use crate::state::settings::EditorSettings;
use crate::stats::{scene_stats, SceneStats};
use crate::templates::Tool;

/// Combined editor state
#[derive(Debug)]
pub struct Editor {
    scene: SceneState,
    selection: SelectionState,
    categories: CategoryRegistry,
    history: HistoryLog,
    settings: EditorSettings,
    tool: Tool,
    gesture: Option<Gesture>,
    /// Display name of the map
    pub map_name: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Empty editor with default settings and categories
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self::with_parts(settings, CategoryRegistry::default())
    }

    pub fn with_parts(settings: EditorSettings, categories: CategoryRegistry) -> Self {
        let mut editor = Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            categories,
            history: HistoryLog::new(settings.history.max_snapshots),
            settings,
            tool: Tool::default(),
            gesture: None,
            map_name: "Untitled Seat Map".to_string(),
        };
        editor.commit();
        editor
    }

    // ── Read access ───────────────────────────────────────────

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Inspector mode derived from the selection and the scene
    pub fn inspector_mode(&self) -> InspectorMode {
        self.selection.homogeneous_kind(&self.scene)
    }

    /// Selected top-level entities in selection order
    pub fn selected_entities(&self) -> Vec<&Entity> {
        self.selection
            .all()
            .iter()
            .filter_map(|id| self.scene.get(id))
            .collect()
    }

    /// Fill color to paint: seats take their category color
    pub fn effective_fill<'a>(&'a self, entity: &'a Entity) -> &'a str {
        match &entity.payload {
            Payload::Seat(seat) => &self.categories.resolve(&seat.category_id).color_hex,
            _ => &entity.style.fill_color,
        }
    }

    /// Ticket price of a seat: its override, else its category price
    pub fn effective_price(&self, entity: &Entity) -> Option<f64> {
        let seat = entity.seat()?;
        Some(
            seat.price_override
                .unwrap_or_else(|| self.categories.resolve(&seat.category_id).price),
        )
    }

    /// Occupancy and revenue statistics for the preview
    pub fn stats(&self) -> SceneStats {
        scene_stats(&self.scene, &self.categories)
    }

    // ── Snapshots and history ─────────────────────────────────

    /// Serialized scene
    pub fn snapshot(&self) -> String {
        self.scene.serialize()
    }

    /// Replace the scene from a snapshot and start a fresh history.
    ///
    /// A malformed snapshot leaves the editor untouched.
    pub fn load_snapshot(&mut self, snapshot: &str) -> EditResult {
        if let Err(e) = self.scene.deserialize(snapshot) {
            tracing::warn!("Rejected snapshot: {e}");
            return Err(e);
        }
        self.gesture = None;
        self.selection.clear();
        self.history.reset();
        self.commit();
        tracing::info!("Loaded scene ({} entities)", self.scene.len());
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo last change; returns whether a step was taken
    pub fn undo(&mut self) -> EditResult<bool> {
        self.abort_gesture();
        let Some(snapshot) = self.history.undo().map(str::to_owned) else {
            return Ok(false);
        };
        if let Err(e) = self.scene.deserialize(&snapshot) {
            self.history.redo();
            tracing::warn!("Undo snapshot unreadable: {e}");
            return Err(e);
        }
        self.selection.prune(&self.scene);
        Ok(true)
    }

    /// Redo last undone change; returns whether a step was taken
    pub fn redo(&mut self) -> EditResult<bool> {
        self.abort_gesture();
        let Some(snapshot) = self.history.redo().map(str::to_owned) else {
            return Ok(false);
        };
        if let Err(e) = self.scene.deserialize(&snapshot) {
            self.history.undo();
            tracing::warn!("Redo snapshot unreadable: {e}");
            return Err(e);
        }
        self.selection.prune(&self.scene);
        Ok(true)
    }

    /// Push the current scene onto the history unless it equals the
    /// snapshot under the cursor. Returns whether a snapshot was pushed.
    pub(crate) fn commit(&mut self) -> bool {
        let snapshot = self.scene.serialize();
        if self.history.current() == Some(snapshot.as_str()) {
            return false;
        }
        self.history.commit(snapshot);
        tracing::debug!(
            "Committed snapshot {} (version {})",
            self.history.cursor(),
            self.scene.version()
        );
        true
    }

    /// Common tail of every discrete edit
    pub(crate) fn settle(&mut self) -> bool {
        self.selection.prune(&self.scene);
        self.commit()
    }
}
