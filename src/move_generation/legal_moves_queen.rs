use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::BishopMoveGenerator;
use crate::move_generation::legal_moves_rook::RookMoveGenerator;
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct QueenMoveGenerator;

impl PieceMoveGenerator for QueenMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let start = out.len();
        RookMoveGenerator.generate(game_state, from, out);
        BishopMoveGenerator.generate(game_state, from, out);

        let queen = Piece::new(game_state.side_to_move, PieceKind::Queen);
        for mv in &mut out[start..] {
            mv.moved = queen;
        }
    }
}
