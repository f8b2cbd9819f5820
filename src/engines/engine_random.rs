//! Random-move engine.
//!
//! Selects uniformly from legal moves and is used for diagnostics and
//! low-strength play.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "RayChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = game_state.get_legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;

    #[test]
    fn picks_only_legal_moves() {
        let mut game = GameState::new_game();
        let legal = game.get_legal_moves();
        let mut engine = RandomEngine::new();
        for _ in 0..20 {
            let out = engine
                .choose_move(&mut game, &GoParams { depth: Some(3) })
                .expect("engine should run");
            assert!(legal.contains(&out.require_move().expect("moves exist")));
            assert_eq!(out.info_lines.len(), 2);
        }
    }

    #[test]
    fn no_move_in_stalemate() {
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::new()
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        assert!(out.best_move.is_none());
    }
}
