//! One-ply greedy engine.
//!
//! Plays every legal move, scores the resulting position statically and keeps
//! the best one for the mover. Ties are broken by a shuffle.

use rand::seq::SliceRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{
    BoardScorer, PieceSquareScorer, CHECKMATE_SCORE, INFINITY_SCORE, STALEMATE_SCORE,
};

pub struct GreedyEngine<S: BoardScorer = PieceSquareScorer> {
    scorer: S,
}

impl GreedyEngine<PieceSquareScorer> {
    pub fn new() -> Self {
        Self {
            scorer: PieceSquareScorer,
        }
    }
}

impl Default for GreedyEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "RayChess Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut legal_moves = game_state.get_legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string greedy_engine requested_depth {}", depth));
        }

        if game_state.is_checkmate {
            out.score = -CHECKMATE_SCORE;
            return Ok(out);
        }
        if game_state.is_stalemate {
            out.score = STALEMATE_SCORE;
            return Ok(out);
        }

        legal_moves.shuffle(&mut rand::rng());

        let mut best_score = -INFINITY_SCORE;
        for mv in &legal_moves {
            game_state.apply_move(mv);
            // The opponent is to move after the move, so negate.
            let score = -self.scorer.score(game_state);
            game_state.undo_move();

            if score > best_score {
                best_score = score;
                out.best_move = Some(*mv);
            }
        }

        out.score = best_score;
        out.info_lines
            .push(format!("info string greedy_engine score {}", best_score));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::{MaterialScorer, CHECKMATE_SCORE};

    #[test]
    fn grabs_the_most_valuable_piece() {
        let mut game = GameState::from_fen("4k3/8/8/2r1q3/3P4/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let out = GreedyEngine::new()
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        let mv = out.require_move().expect("a move should be chosen");
        assert_eq!(mv.to_long_algebraic(), "d4e5");
    }

    #[test]
    fn alternate_scorer_still_picks_a_capture() {
        let mut game =
            GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let out = GreedyEngine::with_scorer(MaterialScorer)
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        assert_eq!(out.score, 100);
        assert_eq!(
            out.best_move.map(|mv| mv.to_long_algebraic()).as_deref(),
            Some("e4d5")
        );
    }

    #[test]
    fn mated_side_gets_the_sentinel_and_no_move() {
        let mut game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");
        let out = GreedyEngine::new()
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        assert!(out.best_move.is_none());
        assert_eq!(out.score, -CHECKMATE_SCORE);
    }
}
