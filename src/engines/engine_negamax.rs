//! Negamax alpha-beta engine with capture quiescence and piece-square scoring.
//!
//! Each instance owns its own search context, so an engine per side keeps an
//! independent root best-move memory across turns.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::negamax::{SearchConfig, SearchContext};

pub struct NegamaxEngine {
    context: SearchContext,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            context: SearchContext::new(config),
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "RayChess Negamax"
    }

    fn new_game(&mut self) {
        self.context.clear_memory();
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let configured_depth = self.context.config().depth;
        if let Some(depth) = params.depth {
            self.context.set_depth(depth);
        }
        let result = self.context.search(game_state);
        self.context.set_depth(configured_depth);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: result.score,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info string negamax_engine depth {} nodes {}",
            params.depth.unwrap_or(configured_depth),
            result.nodes
        ));
        out.info_lines.push(format!(
            "info string negamax_engine white_score {}",
            result.white_score
        ));

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::NegamaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::MoveGenerationError;
    use crate::search::negamax::SearchConfig;

    fn seeded_engine(depth: u8) -> NegamaxEngine {
        NegamaxEngine::new(SearchConfig {
            depth,
            seed: Some(99),
            ..SearchConfig::default()
        })
    }

    #[test]
    fn plays_a_legal_move_and_leaves_the_position() {
        let mut game = GameState::new_game();
        let fen = game.get_fen();
        let mut engine = seeded_engine(2);

        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        let mv = out.require_move().expect("start position has moves");

        assert_eq!(game.get_fen(), fen);
        assert!(game.get_legal_moves().contains(&mv));
        assert_eq!(out.info_lines.len(), 2);
        assert!(!engine.context().remembered_moves().is_empty());
    }

    #[test]
    fn depth_override_does_not_stick() {
        let mut game = GameState::new_game();
        let mut engine = seeded_engine(2);
        engine
            .choose_move(&mut game, &GoParams { depth: Some(1) })
            .expect("engine should run");
        assert_eq!(engine.context().config().depth, 2);
    }

    #[test]
    fn finished_game_reports_no_legal_moves() {
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = seeded_engine(2)
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        assert!(matches!(out.require_move(), Err(MoveGenerationError::NoLegalMoves)));
        assert_eq!(out.score, 0);
    }

    #[test]
    fn new_game_forgets_remembered_moves() {
        let mut game = GameState::new_game();
        let mut engine = seeded_engine(1);
        engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should run");
        engine.new_game();
        assert!(engine.context().remembered_moves().is_empty());
    }
}
