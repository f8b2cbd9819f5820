//! Mutable position model shared by the driver and the search.
//!
//! `GameState` stores the mailbox board, side/king/castling/en-passant state,
//! the half-move clock, and the parallel history stacks that let
//! `undo_move` restore every field exactly. Legality caches (`pinned_pieces`,
//! `checking_pieces`) and the derived check/mate/stalemate flags are refreshed
//! by `get_legal_moves` and never written anywhere else.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{Checker, Pin};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Indexed by [`Color::index`]; always the square actually holding that king.
    pub king_squares: [Square; 2],

    pub castling_rights: CastlingRights,
    /// Square skipped by a pawn that double-stepped on the previous half-move.
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,

    // --- History stacks (strict LIFO, parallel to `move_log`) ---
    pub move_log: Vec<Move>,
    pub notation_log: Vec<String>,
    /// Seeded with the imported clock, then one entry per applied move.
    pub halfmove_clock_history: Vec<u16>,
    /// Seeded with the imported rights, then one snapshot per applied move.
    pub castling_rights_log: Vec<CastlingRights>,
    pub en_passant_log: Vec<Option<Square>>,

    // --- Refreshed by `get_legal_moves` ---
    pub pinned_pieces: Vec<Pin>,
    pub checking_pieces: Vec<Checker>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: EMPTY_BOARD,
            side_to_move: Color::Light,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],

            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,

            move_log: Vec::new(),
            notation_log: Vec::new(),
            halfmove_clock_history: vec![0],
            castling_rights_log: vec![CastlingRights::NONE],
            en_passant_log: Vec::new(),

            pinned_pieces: Vec::new(),
            checking_pieces: Vec::new(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        // The literal is covered by tests; parsing cannot fail.
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Whether the game has ended, as of the most recent legal-move computation.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate || self.is_stalemate
    }

    /// Iterate over every occupied square with its piece, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }
}
