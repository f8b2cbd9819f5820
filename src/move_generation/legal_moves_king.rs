use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_offset_moves, KING_OFFSETS};
use crate::move_generation::move_generator::PieceMoveGenerator;
use crate::moves::chess_move::Move;

pub struct KingMoveGenerator;

impl PieceMoveGenerator for KingMoveGenerator {
    fn generate(&self, game_state: &mut GameState, from: Square, out: &mut Vec<Move>) {
        let side = game_state.side_to_move;
        let king = Piece::new(side, PieceKind::King);
        push_offset_moves(&game_state.board, from, king, &KING_OFFSETS, out);

        generate_castling_moves(game_state, from, king, out);
    }
}

fn generate_castling_moves(game_state: &mut GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    let side = king.color;
    let row = from.row;

    // Rights imply the king is still on its home square; guard against odd imports.
    if row != side.back_row() || from.col < 2 || from.col > 5 {
        return;
    }

    if game_state.castling_rights.kingside[side.index()]
        && squares_empty(game_state, row, from.col + 1, KINGSIDE_ROOK_COL)
        && (from.col..=from.col + 2)
            .all(|col| game_state.is_king_step_safe(from, Square::new(row, col)))
    {
        out.push(Move::castle_kingside(from, king));
    }

    if game_state.castling_rights.queenside[side.index()]
        && squares_empty(game_state, row, QUEENSIDE_ROOK_COL + 1, from.col)
        && (from.col - 2..=from.col)
            .all(|col| game_state.is_king_step_safe(from, Square::new(row, col)))
    {
        out.push(Move::castle_queenside(from, king));
    }
}

/// Columns `start..end` on `row` are all empty.
fn squares_empty(game_state: &GameState, row: u8, start: u8, end: u8) -> bool {
    (start..end).all(|col| game_state.piece_at(Square::new(row, col)).is_none())
}
