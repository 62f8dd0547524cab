//! Editor settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Drawing surface size used by "center on canvas"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Grid display and snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Snap placement and drags to the grid
    pub snap: bool,
    /// Grid cell size in canvas units
    pub size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            snap: true,
            size: 20.0,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept; `None` keeps everything
    pub max_snapshots: Option<usize>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_snapshots: Some(200),
        }
    }
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub history: HistorySettings,
    /// Offset applied to duplicated entities
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: f64,
}

fn default_duplicate_offset() -> f64 {
    20.0
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas: CanvasSettings::default(),
            grid: GridSettings::default(),
            history: HistorySettings::default(),
            duplicate_offset: default_duplicate_offset(),
        }
    }
}

impl EditorSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "seatmap", "seatmap-editor")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from(path: &std::path::Path) -> Option<Self> {
        let json = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings {}: {e}", path.display());
                None
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save settings to {}: {e}", path.display());
                }
            }
            Err(e) => tracing::warn!("Failed to encode settings: {e}"),
        }
    }

    /// Grid size to snap with, or `None` when snapping is off
    pub fn snap_grid(&self) -> Option<f64> {
        (self.grid.snap && self.grid.size > 0.0).then_some(self.grid.size)
    }
}
