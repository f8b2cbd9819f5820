//! Move ordering for the negamax search.
//!
//! Every node shuffles its move list. The root additionally promotes the best
//! moves remembered from the previous search, then captures, then quiet moves.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::moves::chess_move::Move;

pub fn shuffle_moves<R: Rng + ?Sized>(moves: &mut [Move], rng: &mut R) {
    moves.shuffle(rng);
}

/// Partition `moves` into remembered moves (in remembered order), remaining
/// captures, then remaining quiet moves. Remembered moves that are not in
/// `moves` are ignored.
pub fn order_root_moves(moves: Vec<Move>, remembered: &[Move]) -> Vec<Move> {
    if remembered.is_empty() {
        return moves;
    }

    let mut ordered = Vec::with_capacity(moves.len());
    let mut placed: HashSet<u16> = HashSet::with_capacity(remembered.len());
    for prior in remembered {
        if placed.contains(&prior.id()) {
            continue;
        }
        if let Some(current) = moves.iter().find(|mv| mv.id() == prior.id()) {
            placed.insert(current.id());
            ordered.push(*current);
        }
    }

    let (captures, quiet): (Vec<Move>, Vec<Move>) = moves
        .into_iter()
        .filter(|mv| !placed.contains(&mv.id()))
        .partition(Move::is_capture);

    ordered.extend(captures);
    ordered.extend(quiet);
    ordered
}

/// Shuffle, then apply the root partition when `remembered` is given.
pub fn order_moves<R: Rng + ?Sized>(
    mut moves: Vec<Move>,
    remembered: Option<&[Move]>,
    rng: &mut R,
) -> Vec<Move> {
    shuffle_moves(&mut moves, rng);
    match remembered {
        Some(prior) => order_root_moves(moves, prior),
        None => moves,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{order_moves, order_root_moves};
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::parse_square_pair;

    fn find(moves: &[Move], text: &str) -> Move {
        let (from, to) = parse_square_pair(text).expect("test move should parse");
        *moves
            .iter()
            .find(|mv| mv.from == from && mv.to == to)
            .expect("test move should be legal")
    }

    #[test]
    fn root_order_is_remembered_then_captures_then_quiet() {
        // White can capture on d5 with the pawn or the knight.
        let mut game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/2N5/PPPP1PPP/R1BQKBNR w KQkq - 0 2",
        )
        .expect("FEN should parse");
        let moves = game.get_legal_moves();
        let remembered = [
            find(&moves, "g1f3"),
            find(&moves, "c3d5"),
            find(&moves, "g1f3"),
        ];

        let ordered = order_root_moves(moves.clone(), &remembered);

        assert_eq!(ordered.len(), moves.len());
        assert_eq!(ordered[0], remembered[0]);
        assert_eq!(ordered[1], remembered[1]);
        assert_eq!(ordered[2], find(&moves, "e4d5"));
        assert!(ordered[3..].iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn stale_remembered_moves_are_skipped() {
        let mut game = GameState::new_game();
        let moves = game.get_legal_moves();

        let mut later = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN");
        let stale = later.get_legal_moves();

        let ordered = order_root_moves(moves.clone(), &stale);
        assert_eq!(ordered.len(), moves.len());
        assert_eq!(ordered.iter().filter(|mv| mv.id() == 6444).count(), 1);
        assert!(ordered.iter().all(|mv| moves.contains(mv)));
    }

    #[test]
    fn same_seed_gives_same_shuffle() {
        let mut game = GameState::new_game();
        let moves = game.get_legal_moves();

        let first = order_moves(moves.clone(), None, &mut StdRng::seed_from_u64(7));
        let second = order_moves(moves.clone(), None, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
    }
}
