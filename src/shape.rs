//! Rectangular occupancy grids and clockwise rotation
//!
//! A [`Shape`] can only be built through [`Shape::from_rows`], which rejects
//! ragged or empty grids, or [`Shape::from_grid`], whose array type already
//! guarantees a non-empty rectangle. Every `Shape` is a valid rectangle.

use crate::error::{Error, Result};

/// A rectangular grid of occupied/empty cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Row-major occupancy, `height * width` entries
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

/// True iff the grid is non-empty and every row is as long as the first one
pub fn is_valid_shape<R: AsRef<[u8]>>(rows: &[R]) -> bool {
    let Some(first) = rows.first() else {
        return false;
    };
    let width = first.as_ref().len();
    width > 0 && rows.iter().all(|row| row.as_ref().len() == width)
}

/// Validate a raw grid and rotate it 90 degrees clockwise
pub fn rotate_clockwise<R: AsRef<[u8]>>(rows: &[R]) -> Result<Shape> {
    Shape::from_rows(rows)?.rotate_clockwise()
}

impl Shape {
    /// Build a shape from raw rows. Any non-zero value counts as occupied.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        if !is_valid_shape(rows) {
            return Err(Error::InvalidShape);
        }
        let width = rows[0].as_ref().len();
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().map(|&v| v != 0))
            .collect();
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Build a shape from a fixed-size grid. Rows are equal length by type
    /// and an empty grid fails to compile, so this cannot fail.
    pub fn from_grid<const H: usize, const W: usize>(grid: [[u8; W]; H]) -> Self {
        const { assert!(H > 0 && W > 0, "shape grid must be non-empty") };
        Self {
            cells: grid.iter().flatten().map(|&v| v != 0).collect(),
            width: W,
            height: H,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (row, col) is occupied; out-of-range reads as empty
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Shape-local (row, col) of every occupied cell, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }

    /// Raw rows, `1` for occupied and `0` for empty
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&filled| u8::from(filled)).collect())
            .collect()
    }

    /// Rotate 90 degrees clockwise about the bounding box.
    ///
    /// An `H x W` shape becomes `W x H` with `out[i][j] = in[H-1-j][i]`.
    pub fn rotate_clockwise(&self) -> Result<Shape> {
        let (height, width) = (self.height, self.width);
        let rows: Vec<Vec<u8>> = (0..width)
            .map(|i| {
                (0..height)
                    .map(|j| u8::from(self.is_occupied(height - 1 - j, i)))
                    .collect()
            })
            .collect();

        let actual = (rows.len(), rows.first().map_or(0, Vec::len));
        let failed = Error::RotationFailed {
            expected: (width, height),
            actual,
        };
        let rotated = Shape::from_rows(&rows).map_err(|_| failed)?;
        if rotated.height != width || rotated.width != height {
            return Err(failed);
        }
        Ok(rotated)
    }
}
