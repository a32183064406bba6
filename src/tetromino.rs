//! The fixed piece catalog
//!
//! Seven templates, each a spawn-orientation occupancy grid plus a color.
//! Rotation is not tabulated here; pieces rotate their grid directly.

use crate::shape::Shape;
use ratatui::style::Color;

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // long bar
    L,
    J,
    O, // square
    S,
    T,
    Z,
}

impl TetrominoType {
    /// Number of templates in the catalog
    pub const COUNT: usize = 7;

    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Rgb(0xFF, 0xD7, 0x00),
            TetrominoType::L => Color::Rgb(0xA4, 0x5D, 0x43),
            TetrominoType::J => Color::Rgb(0x8A, 0x2B, 0xE2),
            TetrominoType::O => Color::Rgb(0x00, 0xCE, 0xD1),
            TetrominoType::S => Color::Rgb(0x32, 0xCD, 0x32),
            TetrominoType::T => Color::Rgb(0x8A, 0x51, 0xA2),
            TetrominoType::Z => Color::Rgb(0xFF, 0x69, 0xB4),
        }
    }

    /// Every catalog entry, in catalog order
    pub fn all() -> [TetrominoType; Self::COUNT] {
        [
            TetrominoType::I,
            TetrominoType::L,
            TetrominoType::J,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ]
    }

    /// Spawn-orientation shape for this tetromino
    pub fn shape(&self) -> Shape {
        match self {
            TetrominoType::I => Shape::from_grid([[1, 1, 1, 1]]),
            TetrominoType::L => Shape::from_grid([[1, 1, 1], [1, 0, 0]]),
            TetrominoType::J => Shape::from_grid([[1, 1, 1], [0, 0, 1]]),
            TetrominoType::O => Shape::from_grid([[1, 1], [1, 1]]),
            TetrominoType::S => Shape::from_grid([[0, 1, 1], [1, 1, 0]]),
            TetrominoType::T => Shape::from_grid([[1, 1, 1], [0, 1, 0]]),
            TetrominoType::Z => Shape::from_grid([[1, 1, 0], [0, 1, 1]]),
        }
    }
}
