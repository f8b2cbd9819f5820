//! Move counting (perft) over the shared make/undo position.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_side_to_move_in_check;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Number of leaf positions reachable in exactly `depth` half-moves.
pub fn count_all_moves_at_depth(game_state: &mut GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.get_legal_moves();
    if depth == 1 {
        return moves.len();
    }

    let mut total = 0;
    for mv in &moves {
        game_state.apply_move(mv);
        total += count_all_moves_at_depth(game_state, depth - 1);
        game_state.undo_move();
    }
    total
}

/// Leaf count plus a breakdown of the moves that reach the leaves.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = game_state.get_legal_moves();

    for mv in &moves {
        if depth == 1 {
            tally_leaf(game_state, mv, counts);
            continue;
        }
        game_state.apply_move(mv);
        perft_recurse(game_state, depth - 1, counts);
        game_state.undo_move();
    }
}

fn tally_leaf(game_state: &mut GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }

    game_state.apply_move(mv);
    if is_side_to_move_in_check(game_state) {
        counts.checks += 1;
        if game_state.get_legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }
    game_state.undo_move();
}
