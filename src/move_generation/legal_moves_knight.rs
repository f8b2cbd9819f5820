use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_offset_moves, KNIGHT_OFFSETS};
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct KnightMoveGenerator;

impl PieceMoveGenerator for KnightMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let knight = Piece::new(game_state.side_to_move, PieceKind::Knight);
        push_offset_moves(&game_state.board, from, knight, &KNIGHT_OFFSETS, out);
    }
}
