//! Error taxonomy for the rules engine
//!
//! Blocked moves and blocked rotations are not errors; they surface as
//! [`Outcome::Unchanged`](crate::game::Outcome::Unchanged).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A shape grid is empty or its rows have unequal length
    #[error("invalid shape: grid must be non-empty and rectangular")]
    InvalidShape,

    /// The rotated grid did not come out as a `columns x rows` rectangle
    #[error("rotation failed: expected {expected:?} (rows, columns), got {actual:?}")]
    RotationFailed {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A field needs at least one row and one column
    #[error("invalid field dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
