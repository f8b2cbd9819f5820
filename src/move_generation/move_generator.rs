use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::BishopMoveGenerator;
use crate::move_generation::legal_moves_king::KingMoveGenerator;
use crate::move_generation::legal_moves_knight::KnightMoveGenerator;
use crate::move_generation::legal_moves_pawn::PawnMoveGenerator;
use crate::move_generation::legal_moves_queen::QueenMoveGenerator;
use crate::move_generation::legal_moves_rook::RookMoveGenerator;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::square_to_algebraic;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    IllegalMove { from: Square, to: Square },
    InvalidInput(String),
    NoLegalMoves,
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::IllegalMove { from, to } => write!(
                f,
                "no legal move from {} to {}",
                square_to_algebraic(*from),
                square_to_algebraic(*to)
            ),
            MoveGenerationError::InvalidInput(msg) => write!(f, "invalid move input: {msg}"),
            MoveGenerationError::NoLegalMoves => write!(f, "side to move has no legal moves"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Pseudo-legal generation for one piece type. Check and pin legality is left
/// to the validator.
///
/// Generation takes the position mutably only because king castling simulates
/// king steps through the validator; all other generators just read it.
pub trait PieceMoveGenerator: Send + Sync {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>);
}

/// Select the generator for a piece type.
pub fn generator_for(kind: PieceKind) -> &'static dyn PieceMoveGenerator {
    match kind {
        PieceKind::Pawn => &PawnMoveGenerator,
        PieceKind::Knight => &KnightMoveGenerator,
        PieceKind::Bishop => &BishopMoveGenerator,
        PieceKind::Rook => &RookMoveGenerator,
        PieceKind::Queen => &QueenMoveGenerator,
        PieceKind::King => &KingMoveGenerator,
    }
}

/// Every pseudo-legal move for the side to move, scanning the board row by row.
pub fn generate_pseudo_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut out = Vec::with_capacity(64);
    let origins: Vec<(Square, PieceKind)> = game_state
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .map(|(square, piece)| (square, piece.kind))
        .collect();

    for (square, kind) in origins {
        generator_for(kind).generate(game_state, square, &mut out);
    }
    out
}
