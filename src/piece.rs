//! Active falling piece

use crate::error::Result;
use crate::shape::Shape;
use crate::tetromino::TetrominoType;

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Catalog entry, used as the piece's color/identity
    pub kind: TetrominoType,
    /// Current occupancy grid
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i32,
    /// Row of the shape's top-left corner, row 0 is the top of the field
    pub y: i32,
}

impl Piece {
    /// Place a fresh piece of `kind` at the top of a field `columns` wide,
    /// horizontally centered on its bounding box.
    pub fn spawn(kind: TetrominoType, columns: usize) -> Self {
        let shape = kind.shape();
        let x = (columns / 2) as i32 - (shape.width() / 2) as i32;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Absolute (row, col) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(|(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    /// Clockwise rotation of the current shape, without touching the piece
    pub fn rotated_shape(&self) -> Result<Shape> {
        self.shape.rotate_clockwise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        // floor(10 / 2) - floor(4 / 2)
        assert_eq!(Piece::spawn(TetrominoType::I, 10).x, 3);
        // floor(10 / 2) - floor(3 / 2)
        assert_eq!(Piece::spawn(TetrominoType::T, 10).x, 4);
        assert_eq!(Piece::spawn(TetrominoType::O, 10).x, 4);
        assert_eq!(Piece::spawn(TetrominoType::O, 10).y, 0);
        assert_eq!(Piece::spawn(TetrominoType::J, 7).x, 2);
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let mut piece = Piece::spawn(TetrominoType::O, 10);
        piece.x = 2;
        piece.y = 5;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 2), (5, 3), (6, 2), (6, 3)]);
    }

    #[test]
    fn test_rotated_shape_leaves_piece_alone() {
        let piece = Piece::spawn(TetrominoType::I, 10);
        let rotated = piece.rotated_shape().unwrap();
        assert_eq!((rotated.height(), rotated.width()), (4, 1));
        assert_eq!(piece.shape.height(), 1);
    }
}
