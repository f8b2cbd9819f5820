//! Short algebraic notation for applied moves.
//!
//! Notation is written in two phases: the base text is produced when a move is
//! applied, and the check (`+`) or mate (`#`) suffix is patched onto the most
//! recent entry once the following legal-move computation knows the answer.

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{file_char, rank_char, square_to_algebraic};

/// Source prefix needed to tell two same-piece moves to one square apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disambiguation {
    #[default]
    None,
    Rank,
    File,
}

/// Pick the prefix for `mv` given the other moves that are legal right now.
///
/// Pawns never need one: their capture notation already names the source file.
pub fn disambiguation_for(mv: &Move, legal_moves: &[Move]) -> Disambiguation {
    if mv.moved.kind == PieceKind::Pawn {
        return Disambiguation::None;
    }

    let mut out = Disambiguation::None;
    for other in legal_moves {
        if other == mv || other.to != mv.to || other.moved != mv.moved {
            continue;
        }
        out = if other.from.col == mv.from.col {
            Disambiguation::Rank
        } else {
            Disambiguation::File
        };
    }
    out
}

/// Base notation without check or mate suffix, e.g. `Nbd7`, `exd5`, `e8=Q`, `O-O`.
pub fn move_to_notation(mv: &Move, disambiguation: Disambiguation) -> String {
    if mv.is_castle_kingside {
        return "O-O".to_owned();
    }
    if mv.is_castle_queenside {
        return "O-O-O".to_owned();
    }

    let mut out = String::with_capacity(7);
    if mv.moved.kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(file_char(mv.from.col));
            out.push('x');
        }
    } else {
        out.push(mv.moved.kind.letter());
        match disambiguation {
            Disambiguation::None => {}
            Disambiguation::Rank => out.push(rank_char(mv.from.row)),
            Disambiguation::File => out.push(file_char(mv.from.col)),
        }
        if mv.is_capture() {
            out.push('x');
        }
    }

    out.push_str(&square_to_algebraic(mv.to));
    if mv.is_promotion {
        out.push_str("=Q");
    }
    out
}

/// Append `suffix` unless the entry already carries a check or mate marker.
pub fn patch_suffix(entry: &mut String, suffix: char) {
    if !entry.ends_with('+') && !entry.ends_with('#') {
        entry.push(suffix);
    }
}
