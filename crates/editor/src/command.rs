//! JSON command protocol.
//!
//! A host (or a script) drives the editor by sending `{"command": ...}`
//! objects and gets a [`CommandResponse`] back for each one.

use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::{CategoryPatch, Entity, EntityId, EntityPatch, SeatCategory};

use crate::editor::Editor;
use crate::error::{EditResult, EditorError};
use crate::layout::rows::RowLayout;
use crate::layout::{Alignment, CanvasAxis, DistributeAxis};
use crate::state::scene::{entity_display_name, ZOrder};
use crate::state::selection::SelectMode;
use crate::templates::Tool;

/// A command the editor can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a fully specified entity
    AddEntity {
        entity: Entity,
    },
    /// Place a default entity with a placement tool
    Place {
        tool: Tool,
        x: f64,
        y: f64,
    },
    UpdateEntity {
        id: EntityId,
        patch: EntityPatch,
    },
    /// Delete the selected entities
    RemoveSelected,
    Select {
        ids: Vec<EntityId>,
        #[serde(default)]
        mode: SelectMode,
    },
    /// Pointer selection: locked and hidden entities are skipped
    Pick {
        ids: Vec<EntityId>,
        #[serde(default)]
        mode: SelectMode,
    },
    SelectAll,
    ClearSelection,
    Align {
        alignment: Alignment,
    },
    Distribute {
        axis: DistributeAxis,
    },
    CenterOnCanvas {
        axis: CanvasAxis,
    },
    Reorder {
        direction: ZOrder,
    },
    Rotate {
        degrees: f64,
    },
    /// Group the selection
    Group,
    /// Group the selection as a labelled row
    GroupRow {
        label: String,
    },
    /// Dissolve a group, or every selected group when `id` is absent
    Ungroup {
        #[serde(default)]
        id: Option<EntityId>,
    },
    Duplicate,
    SetVisible {
        id: EntityId,
        visible: bool,
    },
    SetLocked {
        id: EntityId,
        locked: bool,
    },
    GenerateRows {
        #[serde(default)]
        layout: RowLayout,
    },
    SetTool {
        tool: Tool,
    },
    Undo,
    Redo,
    AddCategory {
        category: SeatCategory,
    },
    UpdateCategory {
        id: String,
        patch: CategoryPatch,
    },
    DeleteCategory {
        id: String,
    },
    ListCategories,
    /// Inspect the scene: list top-level entities and the selection
    Inspect,
    Stats,
    ExportScene,
    LoadScene {
        scene_json: String,
    },
    /// Escape: clear selection, abort gesture, back to the select tool
    Cancel,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }

    /// Map an editor result: silent rejections still count as success
    fn from_result<T>(result: EditResult<T>, data: impl FnOnce(T) -> serde_json::Value) -> Self {
        match result {
            Ok(value) => Self::ok_with_data(data(value)),
            Err(e) => Self::from_error(e),
        }
    }

    fn from_error(e: EditorError) -> Self {
        if e.is_silent() {
            tracing::debug!("Command had no effect: {e}");
            Self::ok_with_data(json!({ "applied": false, "reason": e.to_string() }))
        } else {
            tracing::warn!("Command rejected: {e}");
            Self::err(e.to_string())
        }
    }
}

fn applied(changed: bool) -> serde_json::Value {
    json!({ "applied": changed })
}

/// Execute a single command on the editor.
pub fn execute_command(editor: &mut Editor, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddEntity { entity } => {
            CommandResponse::from_result(editor.add_entity(entity), |id| json!({ "id": id }))
        }

        EditorCommand::Place { tool, x, y } => {
            CommandResponse::from_result(editor.place(tool, x, y), |id| json!({ "id": id }))
        }

        EditorCommand::UpdateEntity { id, patch } => {
            CommandResponse::from_result(editor.update_entity(&id, &patch), applied)
        }

        EditorCommand::RemoveSelected => CommandResponse::from_result(editor.remove_selected(), |ids| {
            json!({ "removed": ids })
        }),

        EditorCommand::Select { ids, mode } => {
            editor.select(&ids, mode);
            CommandResponse::ok_with_data(json!({ "selected": editor.selection().all() }))
        }

        EditorCommand::Pick { ids, mode } => {
            editor.pick(&ids, mode);
            CommandResponse::ok_with_data(json!({ "selected": editor.selection().all() }))
        }

        EditorCommand::SelectAll => {
            editor.select_all();
            CommandResponse::ok_with_data(json!({ "selected": editor.selection().all() }))
        }

        EditorCommand::ClearSelection => {
            editor.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::Align { alignment } => {
            CommandResponse::from_result(editor.align(alignment), applied)
        }

        EditorCommand::Distribute { axis } => {
            CommandResponse::from_result(editor.distribute(axis), applied)
        }

        EditorCommand::CenterOnCanvas { axis } => {
            CommandResponse::from_result(editor.center_on_canvas(axis), applied)
        }

        EditorCommand::Reorder { direction } => {
            CommandResponse::from_result(editor.reorder(direction), applied)
        }

        EditorCommand::Rotate { degrees } => {
            CommandResponse::from_result(editor.rotate_selected(degrees), applied)
        }

        EditorCommand::Group => {
            CommandResponse::from_result(editor.group(), |id| json!({ "id": id }))
        }

        EditorCommand::GroupRow { label } => {
            CommandResponse::from_result(editor.group_as_row(label), |id| json!({ "id": id }))
        }

        EditorCommand::Ungroup { id } => {
            let result = match id {
                Some(id) => editor.ungroup(&id),
                None => editor.ungroup_selected(),
            };
            CommandResponse::from_result(result, |ids| json!({ "released": ids }))
        }

        EditorCommand::Duplicate => {
            CommandResponse::from_result(editor.duplicate_selected(), |ids| json!({ "ids": ids }))
        }

        EditorCommand::SetVisible { id, visible } => {
            CommandResponse::from_result(editor.set_visible(&id, visible), applied)
        }

        EditorCommand::SetLocked { id, locked } => {
            CommandResponse::from_result(editor.set_locked(&id, locked), applied)
        }

        EditorCommand::GenerateRows { layout } => {
            CommandResponse::from_result(editor.generate_rows(&layout), |ids| json!({ "ids": ids }))
        }

        EditorCommand::SetTool { tool } => {
            editor.set_tool(tool);
            CommandResponse::ok()
        }

        EditorCommand::Undo => {
            CommandResponse::from_result(editor.undo(), |undone| json!({ "undone": undone }))
        }

        EditorCommand::Redo => {
            CommandResponse::from_result(editor.redo(), |redone| json!({ "redone": redone }))
        }

        EditorCommand::AddCategory { category } => {
            CommandResponse::from_result(editor.add_category(category), |()| applied(true))
        }

        EditorCommand::UpdateCategory { id, patch } => {
            CommandResponse::from_result(editor.update_category(&id, &patch), |()| applied(true))
        }

        EditorCommand::DeleteCategory { id } => {
            CommandResponse::from_result(editor.delete_category(&id), |n| {
                json!({ "reassigned": n })
            })
        }

        EditorCommand::ListCategories => {
            CommandResponse::ok_with_data(json!({ "categories": editor.categories().all() }))
        }

        EditorCommand::Inspect => {
            let entities: Vec<serde_json::Value> = editor
                .scene()
                .all()
                .iter()
                .map(|entity| {
                    json!({
                        "id": entity.id,
                        "kind": entity.kind(),
                        "name": entity_display_name(entity),
                        "visible": entity.visible,
                        "locked": entity.locked,
                        "child_count": entity.children().len(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(json!({
                "entity_count": entities.len(),
                "entities": entities,
                "selected": editor.selection().all(),
                "inspector": editor.inspector_mode(),
                "tool": editor.tool(),
                "can_undo": editor.can_undo(),
                "can_redo": editor.can_redo(),
            }))
        }

        EditorCommand::Stats => match serde_json::to_value(editor.stats()) {
            Ok(stats) => CommandResponse::ok_with_data(stats),
            Err(e) => CommandResponse::err(format!("Failed to encode stats: {e}")),
        },

        EditorCommand::ExportScene => {
            CommandResponse::ok_with_data(json!({ "scene_json": editor.snapshot() }))
        }

        EditorCommand::LoadScene { scene_json } => {
            CommandResponse::from_result(editor.load_snapshot(&scene_json), |()| {
                json!({ "entity_count": editor.scene().len() })
            })
        }

        EditorCommand::Cancel => {
            editor.cancel();
            CommandResponse::ok()
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(editor: &mut Editor, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(editor, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(editor: &mut Editor, json: &str) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(editor, cmd))
        .collect())
}
