use super::model::{Coord, Record};

// ---------------------------------------------------------------------------
// Roll filter
// ---------------------------------------------------------------------------

/// Coordinates of every row whose roll flag equals 1, in input order.
///
/// Any other flag value (0, 2, -1, ...) drops the row. Duplicates are kept
/// here; the rasterizer collapses them.
pub fn rolled_coordinates(records: &[Record]) -> Vec<Coord> {
    records
        .iter()
        .filter(|r| r.is_roll())
        .map(Record::coord)
        .collect()
}
