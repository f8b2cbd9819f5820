//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so alternate heuristics can be swapped without touching the search code.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Wider than any reachable score; the initial alpha-beta window.
pub const INFINITY_SCORE: i32 = 200_000;
pub const CHECKMATE_SCORE: i32 = 100_000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 280,
        PieceKind::Bishop => 320,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 300,
    }
}

/// Convert a side-to-move score into white's point of view.
#[inline]
pub fn white_relative(game_state: &GameState, mover_score: i32) -> i32 {
    mover_score * game_state.side_to_move.sign()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_minus_black: i32 = game_state
            .pieces()
            .map(|(_, piece)| piece_value(piece.kind) * piece.color.sign())
            .sum();
        white_minus_black * game_state.side_to_move.sign()
    }
}

type PieceSquareTable = [[i32; 8]; 8];

// White's view, row 0 = rank 8. Dark pieces read the row mirrored.
const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 5, 10, 15, 15, 10, 5, 0],
    [0, 0, 5, 15, 15, 5, 0, 0],
    [0, 0, 5, 10, 10, 5, 0, 0],
    [0, 0, 5, 5, 5, 5, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: PieceSquareTable = [
    [-60, -40, -30, -30, -30, -30, -40, -60],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-25, 0, 10, 15, 15, 10, 0, -25],
    [-20, 5, 15, 25, 25, 15, 5, -20],
    [-20, 0, 15, 25, 25, 15, 0, -20],
    [-25, 5, 10, 15, 15, 10, 5, -25],
    [-40, -20, 0, 10, 10, 0, -20, -40],
    [-60, -40, -30, -30, -30, -30, -40, -60],
];

const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 15, 15, 5, 0, -10],
    [-10, 5, 10, 20, 20, 10, 5, -10],
    [-10, 0, 15, 20, 20, 15, 0, -10],
    [-10, 10, 10, 15, 15, 10, 10, -10],
    [-10, 10, 0, 0, 0, 0, 10, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: PieceSquareTable = [
    [5, 10, 10, 10, 10, 10, 10, 5],
    [10, 15, 20, 20, 20, 20, 15, 10],
    [5, 10, 10, 15, 15, 10, 10, 5],
    [0, 0, 5, 5, 5, 5, 0, 0],
    [0, 0, 5, 5, 5, 5, 0, 0],
    [0, 0, 5, 5, 5, 5, 0, 0],
    [0, 0, 5, 5, 5, 5, 0, 0],
    [0, 0, 5, 10, 10, 5, 0, 0],
];

const QUEEN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 5, 5, 5, 5, 5, 5, 0],
    [0, 5, 10, 10, 10, 10, 5, 0],
    [0, 5, 10, 20, 20, 10, 5, 0],
    [0, 5, 10, 20, 20, 10, 5, 0],
    [0, 5, 10, 10, 10, 10, 5, 0],
    [0, 5, 5, 5, 5, 5, 5, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KING_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 20, 10, 0, 0, 0, 20, 5],
];

#[inline]
const fn table_for(kind: PieceKind) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Positional bonus for `piece` standing on `square`.
#[inline]
pub fn square_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::Light => square.row,
        Color::Dark => 7 - square.row,
    };
    table_for(piece.kind)[row as usize][square.col as usize]
}

/// Material plus piece-square bonuses; the default evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    pub fn white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(square, piece)| {
                (piece_value(piece.kind) + square_bonus(piece, square)) * piece.color.sign()
            })
            .sum()
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        Self::white_minus_black(game_state) * game_state.side_to_move.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, PieceSquareScorer};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(PieceSquareScorer.score(&game), 0);
        assert_eq!(MaterialScorer.score(&game), 0);
    }

    #[test]
    fn score_flips_with_side_to_move() {
        let white = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN");
        let black = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 b - - 0 1").expect("FEN");
        let white_score = PieceSquareScorer.score(&white);
        assert!(white_score > 900);
        assert_eq!(PieceSquareScorer.score(&black), -white_score);
    }

    #[test]
    fn mirrored_positions_score_the_same_for_the_mover() {
        let pairs = [
            (
                "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
                "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/2N5/PPPP1PPP/R1BQKBNR b KQkq - 2 3",
            ),
            (
                "6k1/5ppp/8/8/8/8/1Q3PPP/6K1 w - - 0 1",
                "6k1/1q3ppp/8/8/8/8/5PPP/6K1 b - - 0 1",
            ),
        ];
        for (fen, mirrored) in pairs {
            let game = GameState::from_fen(fen).expect("FEN");
            let mirror = GameState::from_fen(mirrored).expect("FEN");
            assert_eq!(
                PieceSquareScorer.score(&game),
                PieceSquareScorer.score(&mirror),
                "{fen} vs {mirrored}"
            );
        }
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        let center = GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN");
        let rim = GameState::from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 1").expect("FEN");
        assert!(PieceSquareScorer.score(&center) > PieceSquareScorer.score(&rim));
        assert_eq!(MaterialScorer.score(&center), MaterialScorer.score(&rim));
    }
}
