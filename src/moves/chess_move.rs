//! The move record produced by generation and consumed by make/undo.
//!
//! A `Move` snapshots the moved and captured pieces from the board at
//! construction time and never changes afterwards. Identity is the pair of
//! endpoints only, since promotion is always to a queen and no two legal moves
//! share both squares; `PartialEq` and `Hash` ignore the special-move flags.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub is_castle_kingside: bool,
    pub is_castle_queenside: bool,
}

impl Move {
    /// Ordinary move; the moved piece must be on `from`.
    pub fn new(board: &Board, from: Square, to: Square, moved: Piece) -> Self {
        Self {
            from,
            to,
            moved,
            captured: board[to.row as usize][to.col as usize],
            is_en_passant: false,
            is_promotion: false,
            is_castle_kingside: false,
            is_castle_queenside: false,
        }
    }

    pub fn promotion(board: &Board, from: Square, to: Square, moved: Piece) -> Self {
        Self {
            is_promotion: true,
            ..Self::new(board, from, to, moved)
        }
    }

    /// The captured pawn sits beside the mover: same row as `from`, same column as `to`.
    pub fn en_passant(board: &Board, from: Square, to: Square, moved: Piece) -> Self {
        Self {
            captured: board[from.row as usize][to.col as usize],
            is_en_passant: true,
            ..Self::new(board, from, to, moved)
        }
    }

    pub fn castle_kingside(from: Square, moved: Piece) -> Self {
        Self {
            from,
            to: Square::new(from.row, from.col + 2),
            moved,
            captured: None,
            is_en_passant: false,
            is_promotion: false,
            is_castle_kingside: true,
            is_castle_queenside: false,
        }
    }

    pub fn castle_queenside(from: Square, moved: Piece) -> Self {
        Self {
            from,
            to: Square::new(from.row, from.col - 2),
            moved,
            captured: None,
            is_en_passant: false,
            is_promotion: false,
            is_castle_kingside: false,
            is_castle_queenside: true,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle_kingside || self.is_castle_queenside
    }

    /// Numeric identity `from.row*1000 + from.col*100 + to.row*10 + to.col`.
    #[inline]
    pub fn id(&self) -> u16 {
        u16::from(self.from.row) * 1000
            + u16::from(self.from.col) * 100
            + u16::from(self.to.row) * 10
            + u16::from(self.to.col)
    }

    /// Coordinate form, e.g. `e2e4`.
    pub fn to_long_algebraic(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}
