//! Uniform random piece factory
//!
//! Every spawn is an independent uniform draw over the catalog. The
//! generator is seedable so games can be replayed.

use crate::piece::Piece;
use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces freshly placed pieces
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: ChaCha8Rng,
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceFactory {
    /// Create a factory seeded from OS entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a deterministic factory
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> TetrominoType {
        TetrominoType::all()[self.rng.gen_range(0..TetrominoType::COUNT)]
    }

    /// Build a new piece centered at the top of a field `columns` wide.
    /// Whether it fits is for the caller to decide.
    pub fn spawn(&mut self, columns: usize) -> Piece {
        Piece::spawn(self.next_kind(), columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceFactory::with_seed(42);
        let mut b = PieceFactory::with_seed(42);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut factory = PieceFactory::with_seed(7);
        let mut counts: HashMap<TetrominoType, usize> = HashMap::new();
        for _ in 0..7000 {
            *counts.entry(factory.next_kind()).or_default() += 1;
        }
        assert_eq!(counts.len(), TetrominoType::COUNT);
        // Roughly uniform: 1000 expected per kind
        for (kind, count) in counts {
            assert!((700..1300).contains(&count), "{:?} drawn {} times", kind, count);
        }
    }

    #[test]
    fn test_spawn_places_piece_at_top_center() {
        let mut factory = PieceFactory::with_seed(3);
        for _ in 0..20 {
            let piece = factory.spawn(10);
            assert_eq!(piece.y, 0);
            assert_eq!(piece.x, 5 - (piece.shape.width() / 2) as i32);
            assert_eq!(piece.shape, piece.kind.shape());
        }
    }
}
