//! Legal move filtering on top of pseudo-legal generation.
//!
//! King moves and en-passant captures are checked by simulation (apply, look
//! at the mover's king, retract). Everything else is checked analytically
//! against the pin and check sets computed once per position, which is much
//! cheaper than simulating every candidate.

use log::trace;

use crate::game_state::chess_rules::HALF_MOVES_TILL_STALEMATE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pins_and_checks, Checker, Pin};
use crate::move_generation::move_generator::{
    generate_pseudo_legal_moves, generator_for, MoveGenResult, MoveGenerationError,
};
use crate::moves::chess_move::Move;
use crate::moves::move_notation::patch_suffix;
use crate::utils::algebraic::parse_square_pair;

impl GameState {
    /// Recompute pins and checks, then return every legal move for the side to move.
    ///
    /// Also refreshes `is_check`, `is_checkmate` and `is_stalemate`, and patches
    /// the check or mate suffix onto the latest notation entry.
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        self.refresh_attack_state();

        let pseudo = generate_pseudo_legal_moves(self);
        let legal: Vec<Move> = pseudo.into_iter().filter(|mv| self.is_legal(mv)).collect();

        self.is_checkmate = legal.is_empty() && self.is_check;
        self.is_stalemate = !self.is_checkmate
            && (legal.is_empty() || self.halfmove_clock >= HALF_MOVES_TILL_STALEMATE);

        if self.is_checkmate {
            self.patch_latest_notation('#');
        } else if !legal.is_empty() && self.is_check {
            self.patch_latest_notation('+');
        }

        legal
    }

    /// Legal moves of the piece standing on `square` (empty if it is not ours).
    pub fn legal_moves_from(&mut self, square: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };
        if piece.color != self.side_to_move {
            return Vec::new();
        }

        self.refresh_attack_state();
        let mut pseudo = Vec::new();
        generator_for(piece.kind).generate(self, square, &mut pseudo);
        pseudo.into_iter().filter(|mv| self.is_legal(mv)).collect()
    }

    /// Resolve a (start, end) request against the current legal moves.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.get_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    /// Resolve and apply a (start, end) request, with notation disambiguated
    /// against the legal list. The position is untouched when nothing matches.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveGenResult<Move> {
        let legal = self.get_legal_moves();
        let Some(mv) = legal.iter().find(|mv| mv.from == from && mv.to == to).copied() else {
            trace!("rejected move request {from:?} -> {to:?}");
            return Err(MoveGenerationError::IllegalMove { from, to });
        };
        self.apply_move_in_context(&mv, &legal);
        Ok(mv)
    }

    /// [`GameState::try_move`] for coordinate text such as `e2e4`.
    pub fn try_move_text(&mut self, text: &str) -> MoveGenResult<Move> {
        let (from, to) = parse_square_pair(text).map_err(MoveGenerationError::InvalidInput)?;
        self.try_move(from, to)
    }

    /// Legality of a pseudo-legal move, using the cached pin/check sets.
    /// Callers refresh the attack state first.
    pub(crate) fn is_legal(&mut self, mv: &Move) -> bool {
        if mv.moved.kind == PieceKind::King || mv.is_en_passant {
            return self.is_legal_by_simulation(mv);
        }

        if self.checking_pieces.len() > 1 {
            return false;
        }

        if let Some(pin) = self.pinned_pieces.iter().find(|pin| pin.square == mv.from) {
            if !self.stays_on_pin_ray(pin, mv.to) {
                return false;
            }
        }

        match self.checking_pieces.first() {
            None => true,
            Some(checker) => self.resolves_single_check(checker, mv.to),
        }
    }

    /// Whether the king of the side to move could stand on `to` after stepping
    /// there from `from`. With `from == to` this is "not in check now".
    pub fn is_king_step_safe(&mut self, from: Square, to: Square) -> bool {
        if from == to {
            return !pins_and_checks(self).in_check;
        }
        let Some(king) = self.piece_at(from) else {
            return false;
        };
        let step = Move::new(&self.board, from, to, king);
        self.is_legal_by_simulation(&step)
    }

    fn refresh_attack_state(&mut self) {
        let report = pins_and_checks(self);
        self.pinned_pieces = report.pinned;
        self.checking_pieces = report.checkers;
        self.is_check = report.in_check;
    }

    fn is_legal_by_simulation(&mut self, mv: &Move) -> bool {
        self.make_move(mv, String::new());
        self.side_to_move = self.side_to_move.opposite();
        let exposed = pins_and_checks(self).in_check;
        self.side_to_move = self.side_to_move.opposite();
        self.unmake_move();
        !exposed
    }

    /// A pinned piece may move only between the king and the first enemy piece on its ray.
    fn stays_on_pin_ray(&self, pin: &Pin, to: Square) -> bool {
        let king = self.king_square(self.side_to_move);
        for step in 1..8 {
            let Some(square) = king.offset(pin.direction, step) else {
                return false;
            };
            if square == to {
                return true;
            }
            if self
                .piece_at(square)
                .is_some_and(|piece| piece.color != self.side_to_move)
            {
                return false;
            }
        }
        false
    }

    /// Capture the checker, or interpose on the ray for sliders.
    fn resolves_single_check(&self, checker: &Checker, to: Square) -> bool {
        match checker.kind {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                let king = self.king_square(self.side_to_move);
                for step in 1..8 {
                    let Some(square) = king.offset(checker.direction, step) else {
                        return false;
                    };
                    if square == to {
                        return true;
                    }
                    if square == checker.square {
                        return false;
                    }
                }
                false
            }
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => to == checker.square,
        }
    }

    fn patch_latest_notation(&mut self, suffix: char) {
        if let Some(entry) = self.notation_log.last_mut() {
            patch_suffix(entry, suffix);
        }
    }
}
