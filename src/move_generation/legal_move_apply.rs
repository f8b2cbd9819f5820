//! In-place make/unmake on the shared `GameState`.
//!
//! Every applied move pushes exactly one entry onto each history stack
//! (`move_log`, `notation_log`, `halfmove_clock_history`,
//! `castling_rights_log`, `en_passant_log`) and `undo_move` pops exactly one,
//! so an apply/undo pair restores the position bit-for-bit.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::moves::move_notation::{disambiguation_for, move_to_notation, Disambiguation};

impl GameState {
    /// Apply a legal move, logging its notation without disambiguation.
    ///
    /// This is the search path: it never consults the legal-move list.
    pub fn apply_move(&mut self, mv: &Move) {
        let notation = move_to_notation(mv, Disambiguation::None);
        self.make_move(mv, notation);
    }

    /// Apply a legal move chosen from `legal_moves`, disambiguating its notation
    /// against the other moves in that list.
    pub fn apply_move_in_context(&mut self, mv: &Move, legal_moves: &[Move]) {
        let notation = move_to_notation(mv, disambiguation_for(mv, legal_moves));
        self.make_move(mv, notation);
    }

    /// Take back the most recent move. Returns `None` (and changes nothing) when
    /// there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.unmake_move()?;
        self.is_checkmate = false;
        self.is_stalemate = false;
        self.is_check = self
            .notation_log
            .last()
            .is_some_and(|entry| entry.ends_with('+'));
        Some(mv)
    }

    pub(crate) fn make_move(&mut self, mv: &Move, notation: String) {
        let mover = mv.moved.color;

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.moved));

        if mv.is_promotion {
            self.set_piece(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
        }
        if mv.is_en_passant {
            self.set_piece(Square::new(mv.from.row, mv.to.col), None);
        }
        if mv.is_castle_kingside {
            let rook = self.piece_at(Square::new(mv.to.row, mv.to.col + 1));
            self.set_piece(Square::new(mv.to.row, mv.to.col + 1), None);
            self.set_piece(Square::new(mv.to.row, mv.to.col - 1), rook);
        }
        if mv.is_castle_queenside {
            let rook = self.piece_at(Square::new(mv.to.row, mv.to.col - 2));
            self.set_piece(Square::new(mv.to.row, mv.to.col - 2), None);
            self.set_piece(Square::new(mv.to.row, mv.to.col + 1), rook);
        }

        if mv.moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.to;
        }

        self.update_castling_rights(mv);
        self.castling_rights_log.push(self.castling_rights);

        self.halfmove_clock = if mv.is_capture() || mv.moved.kind == PieceKind::Pawn {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.halfmove_clock_history.push(self.halfmove_clock);

        self.en_passant_log.push(self.en_passant_target);
        self.en_passant_target = if mv.moved.kind == PieceKind::Pawn
            && mv.from.row.abs_diff(mv.to.row) == 2
        {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        self.side_to_move = mover.opposite();
        self.move_log.push(*mv);
        self.notation_log.push(notation);
    }

    /// Restore position fields only; derived flags are left to the caller.
    pub(crate) fn unmake_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.notation_log.pop();

        self.halfmove_clock_history.pop();
        self.halfmove_clock = self.halfmove_clock_history.last().copied().unwrap_or(0);

        self.side_to_move = self.side_to_move.opposite();

        self.castling_rights_log.pop();
        if let Some(rights) = self.castling_rights_log.last() {
            self.castling_rights = *rights;
        }

        self.en_passant_target = self.en_passant_log.pop().flatten();

        self.set_piece(mv.to, mv.captured);
        self.set_piece(mv.from, Some(mv.moved));

        if mv.is_en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(Square::new(mv.from.row, mv.to.col), mv.captured);
        }
        if mv.is_castle_kingside {
            let rook = self.piece_at(Square::new(mv.to.row, mv.to.col - 1));
            self.set_piece(Square::new(mv.to.row, mv.to.col - 1), None);
            self.set_piece(Square::new(mv.to.row, mv.to.col + 1), rook);
        }
        if mv.is_castle_queenside {
            let rook = self.piece_at(Square::new(mv.to.row, mv.to.col + 1));
            self.set_piece(Square::new(mv.to.row, mv.to.col + 1), None);
            self.set_piece(Square::new(mv.to.row, mv.to.col - 2), rook);
        }

        if mv.moved.kind == PieceKind::King {
            self.king_squares[mv.moved.color.index()] = mv.from;
        }

        Some(mv)
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        let mover = mv.moved.color;
        match mv.moved.kind {
            PieceKind::King => self.castling_rights.revoke_all(mover),
            PieceKind::Rook if mv.from.row == mover.back_row() => {
                if mv.from.col == KINGSIDE_ROOK_COL {
                    self.castling_rights.kingside[mover.index()] = false;
                } else if mv.from.col == QUEENSIDE_ROOK_COL {
                    self.castling_rights.queenside[mover.index()] = false;
                }
            }
            _ => {}
        }

        if let Some(captured) = mv.captured {
            let enemy = captured.color;
            if captured.kind == PieceKind::Rook && mv.to.row == enemy.back_row() {
                if mv.to.col == KINGSIDE_ROOK_COL {
                    self.castling_rights.kingside[enemy.index()] = false;
                } else if mv.to.col == QUEENSIDE_ROOK_COL {
                    self.castling_rights.queenside[enemy.index()] = false;
                }
            }
        }
    }
}
