//! Crate root module declarations for the Ray Chess engine.
//!
//! Exposes the rules engine (position, make/undo, attack analysis, legal move
//! generation), the negamax search, the pluggable engines, and the FEN/PGN and
//! rendering helpers so the terminal driver, benches, and tests share stable
//! module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_notation;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
}
