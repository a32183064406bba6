//! The settled playing field
//!
//! Row 0 is the top, column 0 is the left. Dimensions are fixed at
//! construction and every row always holds exactly `columns` cells.

use crate::error::{Error, Result};
use crate::piece::Piece;
use crate::tetromino::TetrominoType;

/// Standard field dimensions
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 10;

/// A cell on the field - either empty or filled by a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Grid stored as [row][col]
    cells: Vec<Vec<Cell>>,
    columns: usize,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            cells: vec![vec![Cell::Empty; DEFAULT_COLUMNS]; DEFAULT_ROWS],
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl Field {
    /// Create an empty field; both dimensions must be non-zero
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            cells: vec![vec![Cell::Empty; columns]; rows],
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Set a cell; returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Write the piece's kind into every field cell its shape occupies.
    ///
    /// Does not check for collisions; cells that fall outside the field
    /// are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            self.set(row, col, Cell::Filled(piece.kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are compacted bottom-up into a write cursor, so several full
    /// rows in one pass (adjacent or not) are handled in a single sweep.
    /// Empty rows refill the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let rows = self.rows();
        let mut write_row = rows;

        for read_row in (0..rows).rev() {
            if !self.is_row_full(read_row) {
                write_row -= 1;
                if write_row != read_row {
                    self.cells.swap(write_row, read_row);
                }
            }
        }

        // Rows above the cursor now hold cleared lines
        for row in &mut self.cells[..write_row] {
            row.fill(Cell::Empty);
        }

        write_row
    }

    /// Check if a row is completely filled
    fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.is_filled())
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// Check if the field is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// (row, col, kind) of every filled cell, top to bottom
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, TetrominoType)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| match cell {
                Cell::Filled(kind) => Some((r, c, *kind)),
                Cell::Empty => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(field: &mut Field, row: i32, kind: TetrominoType) {
        for col in 0..field.columns() as i32 {
            field.set(row, col, Cell::Filled(kind));
        }
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = Field::new(20, 10).unwrap();
        assert!(field.is_empty());
        assert_eq!((field.rows(), field.columns()), (20, 10));
        assert_eq!(field, Field::default());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Field::new(0, 10),
            Err(Error::InvalidDimensions { rows: 0, columns: 10 })
        );
        assert!(Field::new(4, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut field = Field::new(4, 4).unwrap();
        assert_eq!(field.get(-1, 0), None);
        assert_eq!(field.get(0, -1), None);
        assert_eq!(field.get(4, 0), None);
        assert_eq!(field.get(0, 4), None);
        assert!(!field.set(4, 0, Cell::Filled(TetrominoType::T)));
        assert!(field.is_empty());
    }

    #[test]
    fn test_merge_writes_only_occupied_cells() {
        let mut field = Field::new(6, 6).unwrap();
        field.set(0, 2, Cell::Filled(TetrominoType::I));
        // Hollow-topped grid at (0, 1): row 0 cols 1 and 3, row 1 col 2
        let mut piece = Piece::spawn(TetrominoType::T, 6);
        piece.x = 1;
        piece.y = 0;
        piece.shape = crate::shape::Shape::from_rows(&[[1u8, 0, 1], [0, 1, 0]]).unwrap();
        field.merge(&piece);

        assert_eq!(field.get(0, 1), Some(Cell::Filled(TetrominoType::T)));
        // Shape bit 0 leaves the existing cell alone
        assert_eq!(field.get(0, 2), Some(Cell::Filled(TetrominoType::I)));
        assert_eq!(field.get(0, 3), Some(Cell::Filled(TetrominoType::T)));
        assert_eq!(field.get(1, 1), Some(Cell::Empty));
        assert_eq!(field.get(1, 2), Some(Cell::Filled(TetrominoType::T)));
    }

    #[test]
    fn test_clear_single_row() {
        let mut field = Field::new(4, 4).unwrap();
        fill_row(&mut field, 3, TetrominoType::O);
        field.set(2, 0, Cell::Filled(TetrominoType::Z));

        assert_eq!(field.clear_full_rows(), 1);
        // The block from row 2 should now be on row 3
        assert_eq!(field.get(3, 0), Some(Cell::Filled(TetrominoType::Z)));
        assert!(field.get(2, 0).unwrap().is_empty());
        assert_eq!(field.rows(), 4);
    }

    #[test]
    fn test_clear_multiple_rows_keeps_order() {
        let mut field = Field::new(6, 3).unwrap();
        field.set(0, 0, Cell::Filled(TetrominoType::L));
        field.set(1, 1, Cell::Filled(TetrominoType::J));
        fill_row(&mut field, 2, TetrominoType::I);
        field.set(3, 2, Cell::Filled(TetrominoType::S));
        fill_row(&mut field, 4, TetrominoType::I);
        fill_row(&mut field, 5, TetrominoType::I);

        assert_eq!(field.clear_full_rows(), 3);
        assert_eq!(field.rows(), 6);
        assert!(field.cells.iter().all(|row| row.len() == 3));
        for row in 0..3 {
            assert!(field.cells[row].iter().all(Cell::is_empty));
        }
        assert_eq!(field.get(3, 0), Some(Cell::Filled(TetrominoType::L)));
        assert_eq!(field.get(4, 1), Some(Cell::Filled(TetrominoType::J)));
        assert_eq!(field.get(5, 2), Some(Cell::Filled(TetrominoType::S)));
    }

    #[test]
    fn test_rows_below_clear_are_untouched() {
        let mut field = Field::new(4, 2).unwrap();
        fill_row(&mut field, 1, TetrominoType::T);
        field.set(2, 0, Cell::Filled(TetrominoType::Z));
        field.set(3, 1, Cell::Filled(TetrominoType::S));
        let before = field.clone();

        assert_eq!(field.clear_full_rows(), 1);
        assert_eq!(field.cells[2], before.cells[2]);
        assert_eq!(field.cells[3], before.cells[3]);
    }

    #[test]
    fn test_no_full_rows_is_noop() {
        let mut field = Field::new(4, 4).unwrap();
        field.set(3, 0, Cell::Filled(TetrominoType::T));
        let before = field.clone();
        assert_eq!(field.clear_full_rows(), 0);
        assert_eq!(field, before);
    }

    #[test]
    fn test_reset_and_filled_cells() {
        let mut field = Field::new(4, 4).unwrap();
        field.set(1, 2, Cell::Filled(TetrominoType::J));
        field.set(3, 0, Cell::Filled(TetrominoType::O));
        let filled: Vec<_> = field.filled_cells().collect();
        assert_eq!(
            filled,
            vec![(1, 2, TetrominoType::J), (3, 0, TetrominoType::O)]
        );

        field.reset();
        assert!(field.is_empty());
        assert_eq!(field.rows(), 4);
    }
}
