use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct PawnMoveGenerator;

impl PieceMoveGenerator for PawnMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let side = game_state.side_to_move;
        let pawn = Piece::new(side, PieceKind::Pawn);
        let forward = side.pawn_direction();
        let board = &game_state.board;

        let build = |to: Square| {
            if to.row == side.promotion_row() {
                Move::promotion(board, from, to, pawn)
            } else {
                Move::new(board, from, to, pawn)
            }
        };

        if let Some(one_step) = from.offset((forward, 0), 1) {
            if game_state.piece_at(one_step).is_none() {
                out.push(build(one_step));

                if from.row == side.pawn_start_row() {
                    if let Some(two_step) = from.offset((forward, 0), 2) {
                        if game_state.piece_at(two_step).is_none() {
                            out.push(Move::new(board, from, two_step, pawn));
                        }
                    }
                }
            }
        }

        for col_delta in [-1i8, 1i8] {
            let Some(to) = from.offset((forward, col_delta), 1) else {
                continue;
            };
            if game_state.piece_at(to).is_some_and(|p| p.color != side) {
                out.push(build(to));
            } else if game_state.en_passant_target == Some(to) {
                out.push(Move::en_passant(board, from, to, pawn));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PawnMoveGenerator;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::PieceMoveGenerator;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        PawnMoveGenerator.generate(&mut game, sq(from), &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_can_step_once_or_twice() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2");
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn dark_pawn_captures_downward_only_onto_enemies() {
        let moves = pawn_moves("4k3/8/3p4/2P1p3/8/8/8/4K3 b - - 0 1", "d6");
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        // e5 holds a dark pawn, c5 a light one.
        assert_eq!(targets, vec![sq("d5"), sq("c5")]);
    }

    #[test]
    fn promotion_flag_set_on_far_rank() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.is_promotion));
    }

    #[test]
    fn en_passant_only_onto_target_square() {
        let moves = pawn_moves("4k3/8/8/2pPp3/8/8/8/4K3 w - c6 0 1", "d5");
        let ep: Vec<&Move> = moves.iter().filter(|m| m.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, sq("c6"));
        assert_eq!(ep[0].captured.map(|p| p.color), Some(crate::game_state::chess_types::Color::Dark));
    }
}
