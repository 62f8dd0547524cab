// Library crate: the editor state engine. Rendering hosts and the CLI drive it
// through `Editor` or the JSON command protocol.

pub mod command;
pub mod editor;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod persistence;
pub mod state;
pub mod stats;
pub mod templates;

pub use editor::Editor;
pub use error::{EditResult, EditorError};
