// Pitch layout: where each lineup slot sits on the pitch diagram.
//
// Coordinates are percentages of the containing box. Rows run from the
// goalkeeper (bottom, largest y) to the forwards (top, smallest y);
// players within a row are spread evenly left to right.

use serde::{Deserialize, Serialize};

use crate::formation::Formation;

/// Vertical extent of the field, in percent of the box height.
pub const PITCH_HEIGHT: f64 = 85.0;
/// Horizontal extent of the field, in percent of the box width.
pub const PITCH_WIDTH: f64 = 86.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPosition {
    pub x: f64,
    pub y: f64,
}

/// Row index and 1-based position within that row for a lineup index.
///
/// Row 0 is the goalkeeper row. `None` once the index runs past the last row.
pub fn row_of(index: usize, formation: Formation) -> Option<(usize, usize)> {
    let mut remaining = index + 1;
    let rows = std::iter::once(1).chain(formation.row_sizes());
    for (row, size) in rows.enumerate() {
        if remaining <= size {
            return Some((row, remaining));
        }
        remaining -= size;
    }
    None
}

/// Pitch coordinate of the player at `index` in the assigned lineup.
///
/// `index` is the slot's position in the assigner's output; any index past
/// the formation's slot count yields `None`.
pub fn player_position(index: usize, formation: Formation) -> Option<PitchPosition> {
    let (row, position_in_row) = row_of(index, formation)?;
    let rows = formation.row_count() as f64;
    let players_in_row = if row == 0 {
        1
    } else {
        formation.row_sizes()[row - 1]
    };

    let y = PITCH_HEIGHT - (PITCH_HEIGHT / rows) * (row as f64 + 1.0);
    let x = (PITCH_WIDTH / (players_in_row as f64 + 1.0)) * position_in_row as f64;
    Some(PitchPosition { x, y })
}
