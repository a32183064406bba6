//! BLOCKFALL - falling-block puzzle rules engine
//!
//! The engine ([`Game`] and the modules it is built from) owns all game
//! rules. The `input`, `settings` and `ui` modules are the thin terminal
//! front end used by the `blockfall` binary.

pub mod collision;
pub mod error;
pub mod factory;
pub mod field;
pub mod game;
pub mod input;
pub mod piece;
pub mod settings;
pub mod shape;
pub mod tetromino;
pub mod ui;

pub use error::{Error, Result};
pub use game::{CellView, Command, Game, GameState, Outcome};
pub use shape::Shape;
pub use tetromino::TetrominoType;
