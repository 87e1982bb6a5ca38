//! Graph search and adversarial game-tree agents for a grid pursuit game
//!
//! This crate provides:
//! - Generic uninformed and informed graph search (depth-first,
//!   breadth-first, uniform-cost, A*) over an abstract problem interface
//! - Depth-limited game-tree agents (minimax, alpha-beta, expectimax) over
//!   a multi-agent turn sequence, plus a one-step reflex agent
//! - Hand-tuned state evaluation functions for the pursuit game
//! - A compact Pacman-style game (ASCII layouts, grid state) that exercises
//!   both halves end to end

pub mod error;
pub mod grid;
pub mod multiagent;
pub mod pacman;
pub mod search;

pub use error::{Error, Result};
pub use grid::{Direction, Position};
pub use multiagent::{
    Agent, AgentConfig, AlphaBetaAgent, EvaluationKind, ExpectimaxAgent, GameState, GhostState,
    MinimaxAgent, PACMAN, PacmanView, ReflexAgent, better_evaluation, score_evaluation,
};
pub use pacman::{GameOutcome, Layout, PacmanState, PositionSearchProblem, manhattan_heuristic};
pub use search::{
    SearchProblem, Successor, a_star_search, breadth_first_search, depth_first_search,
    null_heuristic, uniform_cost_search,
};
