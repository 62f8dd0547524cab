//! Bulk seat-row generation

use serde::{Deserialize, Serialize};
use shared::Entity;

use crate::state::scene::{make_group, GroupKind};
use crate::templates;

/// How seats inside a row are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numbering {
    /// "1", "2", ...
    Numeric,
    /// "A", "B", ...
    Alphabetic,
    /// Row name followed by the seat number: "A1", "A2", ...
    #[default]
    Alphanumeric,
}

/// Grid of rows × seats placed from a starting corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowLayout {
    pub rows: u32,
    pub seats_per_row: u32,
    pub row_spacing: f64,
    pub seat_spacing: f64,
    /// Name of the first row; following rows count up from it
    pub starting_row: String,
    pub start_x: f64,
    pub start_y: f64,
    pub numbering: Numbering,
    /// Category for every generated seat; the default category when absent
    pub category_id: Option<String>,
    /// Wrap each row in a row group
    pub group_rows: bool,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            seats_per_row: 10,
            row_spacing: 40.0,
            seat_spacing: 35.0,
            starting_row: "A".to_string(),
            start_x: 300.0,
            start_y: 200.0,
            numbering: Numbering::default(),
            category_id: None,
            group_rows: false,
        }
    }
}

impl RowLayout {
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }
}

/// Spreadsheet-style name for a zero-based index: A..Z, AA, AB, ...
pub fn letter_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// Inverse of [`letter_name`]; `None` for anything but ASCII letters or a
/// name too long to index
fn letter_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let mut index = 0usize;
    for c in name.to_ascii_uppercase().bytes() {
        index = index
            .checked_mul(26)?
            .checked_add((c - b'A') as usize + 1)?;
    }
    Some(index - 1)
}

fn seat_label(numbering: Numbering, row_name: &str, seat_index: usize) -> String {
    match numbering {
        Numbering::Numeric => (seat_index + 1).to_string(),
        Numbering::Alphabetic => letter_name(seat_index),
        Numbering::Alphanumeric => format!("{}{}", row_name, seat_index + 1),
    }
}

/// Build the entities for `layout`, top row first, in paint order.
pub fn generate(layout: &RowLayout, category_id: &str) -> Vec<Entity> {
    let first_row = letter_index(&layout.starting_row).unwrap_or(0);
    let mut out = Vec::new();

    for row in 0..layout.rows as usize {
        let row_name = letter_name(first_row.saturating_add(row));
        let y = layout.start_y + row as f64 * layout.row_spacing;

        let seats: Vec<Entity> = (0..layout.seats_per_row as usize)
            .map(|i| {
                let x = layout.start_x + i as f64 * layout.seat_spacing;
                templates::seat(x, y, &seat_label(layout.numbering, &row_name, i), category_id)
            })
            .collect();

        if layout.group_rows && !seats.is_empty() {
            let id = uuid::Uuid::new_v4().to_string();
            out.push(make_group(id, GroupKind::Row, Some(row_name), seats));
        } else {
            out.extend(seats);
        }
    }
    out
}
