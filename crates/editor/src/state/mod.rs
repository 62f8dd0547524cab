pub mod categories;
pub mod history;
pub mod scene;
pub mod selection;
pub mod settings;

pub use categories::CategoryRegistry;
pub use history::HistoryLog;
pub use scene::{entity_display_name, short_id, SceneState};
pub use selection::{InspectorMode, SelectMode, SelectionState};
pub use settings::EditorSettings;
