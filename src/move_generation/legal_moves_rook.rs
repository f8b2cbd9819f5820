use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_slider_moves, ORTHOGONAL_DIRECTIONS};
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct RookMoveGenerator;

impl PieceMoveGenerator for RookMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let rook = Piece::new(game_state.side_to_move, PieceKind::Rook);
        push_slider_moves(&game_state.board, from, rook, &ORTHOGONAL_DIRECTIONS, out);
    }
}
