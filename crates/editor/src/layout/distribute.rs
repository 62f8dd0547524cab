//! Even spacing between the outermost entities

use serde::{Deserialize, Serialize};
use shared::Entity;

use super::{bounds, move_bounds_to};
use crate::error::{EditResult, EditorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

/// Space entities evenly along an axis.
///
/// Entities are ordered by their current left (or top) edge; the first and
/// last stay fixed and the ones in between land at
/// `first + (last - first) / (n - 1) * i`. Selection order is irrelevant.
pub fn distribute(items: &mut [&mut Entity], axis: DistributeAxis) -> EditResult<bool> {
    let n = items.len();
    if n < 3 {
        return Err(EditorError::ThresholdNotMet {
            operation: "distribute",
            required: 3,
            actual: n,
        });
    }

    let position = |e: &Entity| {
        let b = bounds(&e.geometry);
        match axis {
            DistributeAxis::Horizontal => b.x0,
            DistributeAxis::Vertical => b.y0,
        }
    };

    let mut order: Vec<(usize, f64)> = items
        .iter()
        .enumerate()
        .map(|(i, e)| (i, position(e)))
        .collect();
    order.sort_by(|a, b| a.1.total_cmp(&b.1));

    let first = order[0].1;
    let last = order[n - 1].1;
    let spacing = (last - first) / (n - 1) as f64;

    let mut changed = false;
    for (rank, &(index, _)) in order.iter().enumerate().take(n - 1).skip(1) {
        let entity = &mut items[index];
        if entity.locked {
            continue;
        }
        let target = first + spacing * rank as f64;
        changed |= match axis {
            DistributeAxis::Horizontal => move_bounds_to(&mut entity.geometry, Some(target), None),
            DistributeAxis::Vertical => move_bounds_to(&mut entity.geometry, None, Some(target)),
        };
    }
    Ok(changed)
}
