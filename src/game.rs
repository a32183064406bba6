//! Core game state and logic
//!
//! [`Game`] exclusively owns the field and the live piece. The driver feeds
//! it one [`Command`] at a time; the game has no clock of its own, gravity
//! arrives as [`Command::GravityTick`].

use crate::collision::collides;
use crate::error::{Error, Result};
use crate::factory::PieceFactory;
use crate::field::Field;
use crate::piece::Piece;
use crate::tetromino::TetrominoType;

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Commands the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    RotateClockwise,
    GravityTick,
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or rotated
    Moved,
    /// Blocked, or nothing to act on; state is untouched
    Unchanged,
    /// The piece came to rest and the next one spawned
    Locked { lines_cleared: usize },
    /// The next piece had no room; the field has been cleared
    GameOver,
}

/// A filled cell in field coordinates, for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub column: usize,
    pub kind: TetrominoType,
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    current_piece: Option<Piece>,
    factory: PieceFactory,
    state: GameState,
    /// Rows cleared since the game started
    lines_cleared: u32,
}

impl Game {
    /// Start a game on an empty `rows x columns` field
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_factory(rows, columns, PieceFactory::new())
    }

    /// Start a game whose piece sequence is fixed by `seed`
    pub fn with_seed(rows: usize, columns: usize, seed: u64) -> Result<Self> {
        Self::with_factory(rows, columns, PieceFactory::with_seed(seed))
    }

    fn with_factory(rows: usize, columns: usize, factory: PieceFactory) -> Result<Self> {
        let mut game = Self {
            field: Field::new(rows, columns)?,
            current_piece: None,
            factory,
            state: GameState::Playing,
            lines_cleared: 0,
        };
        game.spawn_piece();
        tracing::info!(rows, columns, "new game");
        Ok(game)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Process a single command to completion.
    ///
    /// Only a broken shape surfaces as `Err`; blocked moves are
    /// `Ok(Outcome::Unchanged)`. After game over every command is ignored
    /// until [`Game::restart`].
    pub fn handle_command(&mut self, command: Command) -> Result<Outcome> {
        if self.state == GameState::GameOver {
            return Ok(Outcome::Unchanged);
        }

        let outcome = match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::MoveDown | Command::GravityTick => self.move_down(),
            Command::Rotate | Command::RotateClockwise => self.rotate()?,
        };
        Ok(outcome)
    }

    /// Replace the live piece with a new one from the factory.
    ///
    /// If the new piece already overlaps the field the game is over: the
    /// field is emptied and no piece is installed.
    pub fn spawn_piece(&mut self) -> GameState {
        let piece = self.factory.spawn(self.field.columns());
        if collides(&self.field, &piece.shape, piece.x, piece.y) {
            tracing::info!(
                kind = ?piece.kind,
                lines = self.lines_cleared,
                "spawn blocked, game over"
            );
            self.field.reset();
            self.current_piece = None;
            self.state = GameState::GameOver;
        } else {
            self.current_piece = Some(piece);
            self.state = GameState::Playing;
        }
        self.state
    }

    /// Start over on an empty field of the same size
    pub fn restart(&mut self) {
        tracing::info!(lines = self.lines_cleared, "restart");
        self.field.reset();
        self.lines_cleared = 0;
        self.spawn_piece();
    }

    /// Every filled field cell
    pub fn field_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.field
            .filled_cells()
            .map(|(row, column, kind)| CellView { row, column, kind })
    }

    /// Every occupied cell of the live piece, in field coordinates
    pub fn piece_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.current_piece.iter().flat_map(|piece| {
            piece.cells().filter_map(move |(row, col)| {
                Some(CellView {
                    row: usize::try_from(row).ok()?,
                    column: usize::try_from(col).ok()?,
                    kind: piece.kind,
                })
            })
        })
    }

    /// Move sideways by `dx` if the target is free
    fn shift(&mut self, dx: i32) -> Outcome {
        let Some(piece) = &mut self.current_piece else {
            return Outcome::Unchanged;
        };
        if collides(&self.field, &piece.shape, piece.x + dx, piece.y) {
            return Outcome::Unchanged;
        }
        piece.x += dx;
        Outcome::Moved
    }

    /// Fall one row, or lock in place when the row below is taken
    fn move_down(&mut self) -> Outcome {
        let Some(piece) = &mut self.current_piece else {
            return Outcome::Unchanged;
        };
        if collides(&self.field, &piece.shape, piece.x, piece.y + 1) {
            return self.lock_piece();
        }
        piece.y += 1;
        Outcome::Moved
    }

    /// Rotate clockwise in place; no wall kicks
    fn rotate(&mut self) -> Result<Outcome> {
        let Some(piece) = &mut self.current_piece else {
            return Ok(Outcome::Unchanged);
        };
        let rotated = piece.rotated_shape().inspect_err(|err| match err {
            Error::RotationFailed { .. } => {
                tracing::error!(kind = ?piece.kind, %err, "rotation produced a malformed shape")
            }
            _ => tracing::warn!(kind = ?piece.kind, %err, "rotation rejected"),
        })?;
        if collides(&self.field, &rotated, piece.x, piece.y) {
            return Ok(Outcome::Unchanged);
        }
        piece.shape = rotated;
        Ok(Outcome::Moved)
    }

    /// Merge the live piece, clear rows and spawn the next piece
    fn lock_piece(&mut self) -> Outcome {
        let Some(piece) = self.current_piece.take() else {
            return Outcome::Unchanged;
        };

        self.field.merge(&piece);
        let lines_cleared = self.field.clear_full_rows();
        self.lines_cleared += lines_cleared as u32;
        tracing::debug!(
            kind = ?piece.kind,
            x = piece.x,
            y = piece.y,
            lines_cleared,
            "piece locked"
        );

        match self.spawn_piece() {
            GameState::GameOver => Outcome::GameOver,
            GameState::Playing => Outcome::Locked { lines_cleared },
        }
    }
}
