//! Align to an anchor and center on the canvas

use serde::{Deserialize, Serialize};
use shared::Entity;

use super::{bounds, move_bounds_to};
use crate::error::{EditResult, EditorError};

/// Edge or center line to align on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    HorizontalCenter,
    VerticalCenter,
}

/// Which axes `center_on_canvas` centers on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasAxis {
    Horizontal,
    Vertical,
    Both,
}

/// Align every entity to the first one.
///
/// `items` must be in selection order; the first entry is the anchor and is
/// never moved. Locked entities keep their place. Returns whether anything
/// moved.
pub fn align(items: &mut [&mut Entity], alignment: Alignment) -> EditResult<bool> {
    if items.len() < 2 {
        return Err(EditorError::ThresholdNotMet {
            operation: "align",
            required: 2,
            actual: items.len(),
        });
    }

    let (anchor, rest) = items.split_at_mut(1);
    let anchor = bounds(&anchor[0].geometry);
    let mut changed = false;

    for entity in rest.iter_mut().filter(|e| !e.locked) {
        let b = bounds(&entity.geometry);
        let (left, top) = match alignment {
            Alignment::Left => (Some(anchor.x0), None),
            Alignment::Right => (Some(anchor.x0 + anchor.width() - b.width()), None),
            Alignment::HorizontalCenter => {
                (Some(anchor.x0 + (anchor.width() - b.width()) / 2.0), None)
            }
            Alignment::Top => (None, Some(anchor.y0)),
            Alignment::Bottom => (None, Some(anchor.y0 + anchor.height() - b.height())),
            Alignment::VerticalCenter => {
                (None, Some(anchor.y0 + (anchor.height() - b.height()) / 2.0))
            }
        };
        changed |= move_bounds_to(&mut entity.geometry, left, top);
    }

    Ok(changed)
}

/// Center each entity on the canvas independently.
pub fn center_on_canvas(
    items: &mut [&mut Entity],
    axis: CanvasAxis,
    canvas_width: f64,
    canvas_height: f64,
) -> EditResult<bool> {
    if items.is_empty() {
        return Err(EditorError::NothingSelected);
    }

    let mut changed = false;
    for entity in items.iter_mut().filter(|e| !e.locked) {
        let b = bounds(&entity.geometry);
        let left = matches!(axis, CanvasAxis::Horizontal | CanvasAxis::Both)
            .then(|| (canvas_width - b.width()) / 2.0);
        let top = matches!(axis, CanvasAxis::Vertical | CanvasAxis::Both)
            .then(|| (canvas_height - b.height()) / 2.0);
        changed |= move_bounds_to(&mut entity.geometry, left, top);
    }
    Ok(changed)
}
