//! Engine abstraction layer used by the terminal driver.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// From the side to move's point of view.
    pub score: i32,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    /// The chosen move, or `NoLegalMoves` when the game was already over.
    pub fn require_move(&self) -> MoveGenResult<Move> {
        self.best_move.ok_or(MoveGenerationError::NoLegalMoves)
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. The position is left as it was found.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
