use thiserror::Error;

use super::model::{Coord, OccupancyVolume};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("coordinate {coord:?} is outside the {}x{}x{} grid", .dims[0], .dims[1], .dims[2])]
    OutOfBounds { coord: Coord, dims: [usize; 3] },
    #[error("a {}x{}x{} grid has too many cells", .dims[0], .dims[1], .dims[2])]
    TooLarge { dims: [usize; 3] },
}

/// Build an occupancy volume of shape `dims` with every coordinate marked.
///
/// A coordinate outside `[0, dims[a])` on any axis aborts the whole raster;
/// nothing is clipped or wrapped.
pub fn rasterize<I>(coords: I, dims: [usize; 3]) -> Result<OccupancyVolume, RasterError>
where
    I: IntoIterator<Item = Coord>,
{
    let mut volume = OccupancyVolume::try_new(dims).ok_or(RasterError::TooLarge { dims })?;
    for coord in coords {
        let cell = to_cell(coord, dims).ok_or(RasterError::OutOfBounds { coord, dims })?;
        volume.fill(cell);
    }
    Ok(volume)
}

fn to_cell(coord: Coord, dims: [usize; 3]) -> Option<[usize; 3]> {
    let mut cell = [0usize; 3];
    for axis in 0..3 {
        let v = usize::try_from(coord[axis]).ok()?;
        if v >= dims[axis] {
            return None;
        }
        cell[axis] = v;
    }
    Some(cell)
}
