use bitvec::vec::BitVec;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A grid coordinate as read from the table. Signed so that negative input
/// survives parsing and is rejected by the rasterizer instead of the loader.
pub type Coord = [i64; 3];

/// The first four columns of a row: three coordinates and the roll flag.
/// Columns are matched by position, not by header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub roll: i64,
}

impl Record {
    pub fn coord(&self) -> Coord {
        [self.x, self.y, self.z]
    }

    /// Whether this row takes part in the visualisation.
    pub fn is_roll(&self) -> bool {
        self.roll == 1
    }
}

// ---------------------------------------------------------------------------
// OccupancyVolume – bit-packed 3D boolean grid
// ---------------------------------------------------------------------------

/// Dense boolean volume, one bit per voxel, all cells `false` on creation.
///
/// Cell `(i, j, k)` lives at bit `(i * len_j + j) * len_k + k`, so the last
/// axis is contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyVolume {
    dims: [usize; 3],
    data: BitVec,
}

impl OccupancyVolume {
    /// # Panics
    ///
    /// If the cell count overflows `usize`; use [`Self::try_new`] for
    /// untrusted shapes.
    pub fn new(dims: [usize; 3]) -> Self {
        match Self::try_new(dims) {
            Some(volume) => volume,
            None => panic!("volume {dims:?} has too many cells"),
        }
    }

    /// `None` when the cell count overflows `usize`.
    pub fn try_new(dims: [usize; 3]) -> Option<Self> {
        let total = cell_count(dims)?;
        Some(Self {
            dims,
            data: BitVec::repeat(false, total),
        })
    }

    /// A cube of side `n`.
    pub fn cube(n: usize) -> Self {
        Self::new([n, n, n])
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Flat bit index for an in-range cell, `None` otherwise.
    pub fn index_of(&self, cell: [usize; 3]) -> Option<usize> {
        let [li, lj, lk] = self.dims;
        let [i, j, k] = cell;
        if i >= li || j >= lj || k >= lk {
            return None;
        }
        Some((i * lj + j) * lk + k)
    }

    /// Out-of-range cells read as empty.
    pub fn get(&self, cell: [usize; 3]) -> bool {
        self.index_of(cell).is_some_and(|idx| self.data[idx])
    }

    /// Mark a cell filled. Returns `false` if the cell is outside the grid.
    pub fn fill(&mut self, cell: [usize; 3]) -> bool {
        match self.index_of(cell) {
            Some(idx) => {
                self.data.set(idx, true);
                true
            }
            None => false,
        }
    }

    pub fn count_filled(&self) -> usize {
        self.data.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.data.not_any()
    }

    /// Filled cells in storage order.
    pub fn iter_filled(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let [_, lj, lk] = self.dims;
        self.data.iter_ones().map(move |idx| {
            let k = idx % lk;
            let j = (idx / lk) % lj;
            let i = idx / (lk * lj);
            [i, j, k]
        })
    }

    /// Filled `(j, k)` cells of layer `i` along the first axis.
    pub fn layer(&self, i: usize) -> Vec<[usize; 2]> {
        let [li, lj, lk] = self.dims;
        if i >= li {
            return Vec::new();
        }
        let start = i * lj * lk;
        self.data[start..start + lj * lk]
            .iter_ones()
            .map(|idx| [idx / lk, idx % lk])
            .collect()
    }
}

/// Number of cells in a grid of shape `dims`, `None` on overflow.
pub fn cell_count(dims: [usize; 3]) -> Option<usize> {
    dims[0].checked_mul(dims[1])?.checked_mul(dims[2])
}
