use crate::error::{Error, Result};
use ndarray::{s, Array3, ArrayView3, ArrayViewMut3};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Ghost cell some callers use to park the bulk concentration.
pub const REFERENCE_CELL: [usize; 3] = [0, 0, 0];

/// A dense scalar field with one ghost layer on every face.
///
/// Along each axis, index `0` and index `dim + 1` are ghost cells and
/// `1..=dim` are interior cells, so the padded buffer is always two cells
/// larger than the interior on every axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array3<f64>", into = "Array3<f64>")]
pub struct PaddedGrid {
    data: Array3<f64>,
}

/*
 * Constructors
 */
impl PaddedGrid {
    pub fn filled(interior: [usize; 3], value: f64) -> Result<Self> {
        let [n, m, l] = interior;
        if n == 0 || m == 0 || l == 0 {
            return Err(Error::DegenerateGrid {
                shape: [n + 2, m + 2, l + 2],
            });
        }
        Ok(PaddedGrid {
            data: Array3::from_elem((n + 2, m + 2, l + 2), value),
        })
    }

    pub fn zeros(interior: [usize; 3]) -> Result<Self> {
        Self::filled(interior, 0.)
    }

    /// Pads `interior` with a ghost layer holding `ghost_value`.
    pub fn from_interior(interior: ArrayView3<f64>, ghost_value: f64) -> Result<Self> {
        let &[n, m, l] = interior.shape() else {
            unreachable!("ArrayView3 always has three axes");
        };
        let mut grid = Self::filled([n, m, l], ghost_value)?;
        grid.interior_mut().assign(&interior);
        Ok(grid)
    }

    /// Wraps an already padded buffer.
    pub fn from_padded(data: Array3<f64>) -> Result<Self> {
        let &[ni, nj, nk] = data.shape() else {
            unreachable!("Array3 always has three axes");
        };
        if ni < 3 || nj < 3 || nk < 3 {
            return Err(Error::DegenerateGrid {
                shape: [ni, nj, nk],
            });
        }
        Ok(PaddedGrid { data })
    }
}

impl TryFrom<Array3<f64>> for PaddedGrid {
    type Error = Error;

    fn try_from(data: Array3<f64>) -> Result<Self> {
        Self::from_padded(data)
    }
}

impl From<PaddedGrid> for Array3<f64> {
    fn from(grid: PaddedGrid) -> Self {
        grid.data
    }
}

/*
 * Shape
 */
impl PaddedGrid {
    pub fn padded_shape(&self) -> [usize; 3] {
        let shape = self.data.shape();
        [shape[0], shape[1], shape[2]]
    }

    pub fn interior_shape(&self) -> [usize; 3] {
        self.padded_shape().map(|dim| dim - 2)
    }

    /// Fails fast when the grid was built for a different interior than the
    /// caller is about to relax.
    pub fn expect_interior(&self, expected: [usize; 3]) -> Result<()> {
        let found = self.interior_shape();
        if found != expected {
            return Err(Error::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    pub fn is_ghost(&self, pos: [usize; 3]) -> bool {
        let padded = self.padded_shape();
        (0..3).any(|axis| pos[axis] == 0 || pos[axis] + 1 == padded[axis])
    }
}

/*
 * Access to data
 */
impl PaddedGrid {
    pub fn get(&self, pos: [usize; 3]) -> Option<f64> {
        self.data.get(pos).copied()
    }

    pub fn set(&mut self, pos: [usize; 3], value: f64) -> Result<()> {
        let shape = self.padded_shape();
        match self.data.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { pos, shape }),
        }
    }

    pub fn interior(&self) -> ArrayView3<f64> {
        let [n, m, l] = self.interior_shape();
        self.data.slice(s![1..n + 1, 1..m + 1, 1..l + 1])
    }

    pub fn interior_mut(&mut self) -> ArrayViewMut3<f64> {
        let [n, m, l] = self.interior_shape();
        self.data.slice_mut(s![1..n + 1, 1..m + 1, 1..l + 1])
    }

    pub fn as_array(&self) -> &Array3<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array3<f64> {
        self.data
    }

    /// Sets every ghost cell to `value`, e.g. to seed a fixed bulk
    /// concentration before the first refresh.
    pub fn fill_ghosts(&mut self, value: f64) {
        for_each_ghost(self.padded_shape(), |pos| self.data[pos] = value);
    }

    /// The bulk concentration stored in [`REFERENCE_CELL`].
    ///
    /// Some callers still park the bulk value there; new code passes it to
    /// `refresh` directly. The tissue boundary never overwrites this cell.
    pub fn reference_bulk(&self) -> f64 {
        self.data[REFERENCE_CELL]
    }

    pub fn set_reference_bulk(&mut self, value: f64) {
        self.data[REFERENCE_CELL] = value;
    }
}

impl Index<[usize; 3]> for PaddedGrid {
    type Output = f64;

    fn index(&self, pos: [usize; 3]) -> &f64 {
        &self.data[pos]
    }
}

impl IndexMut<[usize; 3]> for PaddedGrid {
    fn index_mut(&mut self, pos: [usize; 3]) -> &mut f64 {
        &mut self.data[pos]
    }
}

/// Calls `visit` once for every ghost cell of a grid with the given padded
/// shape. Interior columns only contribute their two end cells, so the cost
/// is proportional to the surface rather than the volume.
pub(crate) fn for_each_ghost(padded: [usize; 3], mut visit: impl FnMut([usize; 3])) {
    let [ni, nj, nk] = padded;
    for i in 0..ni {
        let i_ghost = i == 0 || i == ni - 1;
        for j in 0..nj {
            if i_ghost || j == 0 || j == nj - 1 {
                for k in 0..nk {
                    visit([i, j, k]);
                }
            } else {
                visit([i, j, 0]);
                visit([i, j, nk - 1]);
            }
        }
    }
}
