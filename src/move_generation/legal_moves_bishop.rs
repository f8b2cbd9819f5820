use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_slider_moves, DIAGONAL_DIRECTIONS};
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct BishopMoveGenerator;

impl PieceMoveGenerator for BishopMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let bishop = Piece::new(game_state.side_to_move, PieceKind::Bishop);
        push_slider_moves(&game_state.board, from, bishop, &DIAGONAL_DIRECTIONS, out);
    }
}

#[cfg(test)]
mod tests {
    use super::BishopMoveGenerator;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::PieceMoveGenerator;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn rays_stop_on_capture_and_before_own_piece() {
        let mut game = GameState::from_fen("4k3/8/5p2/8/3B4/8/1P6/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        BishopMoveGenerator.generate(&mut game, algebraic_to_square("d4").expect("d4"), &mut out);

        // e5, f6 (capture) | e3, f2, g1 | c3 (b2 is own) | c5, b6, a7
        assert_eq!(out.len(), 9);
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
        assert!(!out.iter().any(|m| m.to == algebraic_to_square("b2").expect("b2")));
    }
}
