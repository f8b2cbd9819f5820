//! Fixed-depth negamax with alpha-beta pruning and a capture-only quiescence
//! extension.
//!
//! All search state lives in an owned [`SearchContext`], so two engines (one
//! per side) never share move-ordering memory. By default the search walks a
//! single mutable `GameState` with apply/undo; every applied move is undone
//! before the search returns.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::moves::move_notation::{disambiguation_for, move_to_notation};
use crate::search::board_scoring::{
    white_relative, BoardScorer, PieceSquareScorer, CHECKMATE_SCORE, INFINITY_SCORE,
    STALEMATE_SCORE,
};
use crate::search::move_ordering::order_moves;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
pub const DEFAULT_REMEMBERED_MOVES: usize = 8;

/// How child positions are produced during the tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStrategy {
    /// Apply to the shared position, recurse, undo.
    #[default]
    SharedMakeUndo,
    /// Clone the position for each child and apply there.
    ClonePerBranch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Cap on the root best-move list carried into the next search.
    pub max_remembered_moves: usize,
    /// With pruning off every node is searched with the full window.
    pub pruning: bool,
    pub strategy: PositionStrategy,
    /// Shuffle seed; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            max_remembered_moves: DEFAULT_REMEMBERED_MOVES,
            pruning: true,
            strategy: PositionStrategy::SharedMakeUndo,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// From the side to move's point of view.
    pub score: i32,
    /// Same score from white's point of view.
    pub white_score: i32,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootBest {
    pub mv: Move,
    pub score: i32,
}

pub struct SearchContext<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
    rng: StdRng,
    nodes: u64,
    /// Newest first; the best moves found at the root of the latest search.
    remembered: Vec<RootBest>,
    prior_root_moves: Vec<Move>,
    chosen: Option<RootBest>,
}

impl SearchContext<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PieceSquareScorer)
    }
}

impl Default for SearchContext<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> SearchContext<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            scorer,
            rng,
            nodes: 0,
            remembered: Vec::new(),
            prior_root_moves: Vec::new(),
            chosen: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Root best moves recorded by the most recent search, newest first.
    pub fn remembered_moves(&self) -> &[RootBest] {
        &self.remembered
    }

    /// Forget move-ordering memory, e.g. when a new game starts.
    pub fn clear_memory(&mut self) {
        self.remembered.clear();
        self.prior_root_moves.clear();
        self.chosen = None;
    }

    /// Search the position to the configured depth and pick a move.
    ///
    /// Returns no move when the game is already over, with the terminal score.
    pub fn search(&mut self, game_state: &mut GameState) -> SearchResult {
        self.nodes = 0;
        self.chosen = None;
        self.prior_root_moves = self.remembered.iter().map(|entry| entry.mv).collect();
        self.remembered.clear();

        let score = if self.config.depth == 0 {
            self.scorer.score(game_state)
        } else {
            self.negamax(game_state, self.config.depth, 0, -INFINITY_SCORE, INFINITY_SCORE)
        };

        let result = SearchResult {
            best_move: self.chosen.map(|entry| entry.mv),
            score,
            white_score: white_relative(game_state, score),
            nodes: self.nodes,
        };

        info!(
            "searched {} nodes at depth {}: best {:?} score {}",
            result.nodes,
            self.config.depth,
            result.best_move.map(|mv| mv.to_long_algebraic()),
            result.white_score
        );

        result
    }

    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth == 0 {
            return self.quiescence(game_state, ply, alpha, beta);
        }

        let moves = game_state.get_legal_moves();
        if game_state.is_checkmate || game_state.is_stalemate {
            return terminal_score(game_state, ply);
        }

        let is_root = ply == 0;
        let prior = std::mem::take(&mut self.prior_root_moves);
        let ordered = order_moves(
            moves.clone(),
            (is_root && !prior.is_empty()).then_some(prior.as_slice()),
            &mut self.rng,
        );
        self.prior_root_moves = prior;

        let mut best_score = -INFINITY_SCORE;

        for mv in &ordered {
            let (child_alpha, child_beta) = self.child_window(alpha, beta);
            let score = -self.visit_child(game_state, mv, |ctx, child| {
                ctx.negamax(child, depth - 1, ply + 1, child_alpha, child_beta)
            });

            if score > best_score {
                best_score = score;
                if is_root {
                    self.record_root_best(game_state, mv, score, &moves);
                }
            }

            if best_score > alpha {
                alpha = best_score;
            }
            if self.config.pruning && alpha >= beta {
                break;
            }
        }

        best_score
    }

    /// Capture-only extension. Positions reached by a quiet move are scored
    /// statically; otherwise capture replies are searched without a depth limit.
    fn quiescence(&mut self, game_state: &mut GameState, ply: u8, mut alpha: i32, beta: i32) -> i32 {
        let base_score = self.scorer.score(game_state);

        let last_was_capture = game_state.move_log.last().is_some_and(Move::is_capture);
        if !last_was_capture {
            return base_score;
        }

        // Mate is detected before the stand-pat cutoff so the cutoff never hides it.
        let moves = game_state.get_legal_moves();
        if game_state.is_checkmate || game_state.is_stalemate {
            return terminal_score(game_state, ply);
        }

        if base_score > alpha {
            alpha = base_score;
        }
        if self.config.pruning && alpha > beta {
            return beta;
        }

        let captures: Vec<Move> = moves.into_iter().filter(Move::is_capture).collect();
        let captures = order_moves(captures, None, &mut self.rng);

        for mv in &captures {
            let (child_alpha, child_beta) = self.child_window(alpha, beta);
            let score = -self.visit_child(game_state, mv, |ctx, child| {
                ctx.quiescence(child, ply + 1, child_alpha, child_beta)
            });

            if score > alpha {
                alpha = score;
            }
            if self.config.pruning && score >= beta {
                return beta;
            }
        }

        alpha
    }

    #[inline]
    fn child_window(&self, alpha: i32, beta: i32) -> (i32, i32) {
        if self.config.pruning {
            (-beta, -alpha)
        } else {
            (-INFINITY_SCORE, INFINITY_SCORE)
        }
    }

    fn visit_child<F>(&mut self, game_state: &mut GameState, mv: &Move, recurse: F) -> i32
    where
        F: FnOnce(&mut Self, &mut GameState) -> i32,
    {
        self.nodes += 1;
        match self.config.strategy {
            PositionStrategy::SharedMakeUndo => {
                game_state.apply_move(mv);
                let score = recurse(self, game_state);
                game_state.undo_move();
                score
            }
            PositionStrategy::ClonePerBranch => {
                let mut child = game_state.clone();
                child.apply_move(mv);
                recurse(self, &mut child)
            }
        }
    }

    fn record_root_best(&mut self, game_state: &GameState, mv: &Move, score: i32, legal: &[Move]) {
        let entry = RootBest { mv: *mv, score };
        self.remembered.insert(0, entry);
        self.remembered.truncate(self.config.max_remembered_moves);
        self.chosen = Some(entry);

        debug!(
            "{}, {}",
            move_to_notation(mv, disambiguation_for(mv, legal)),
            white_relative(game_state, score)
        );
    }
}

/// Score of a finished game for the side to move.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if game_state.is_checkmate {
        -CHECKMATE_SCORE + i32::from(ply)
    } else {
        STALEMATE_SCORE
    }
}
