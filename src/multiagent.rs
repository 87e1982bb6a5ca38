//! Adversarial game-tree search agents.
//!
//! Depth-limited recursive tree search over a multi-agent turn sequence:
//! Pacman (agent 0) maximizes, ghosts minimize ([`MinimaxAgent`],
//! [`AlphaBetaAgent`]) or act uniformly at random ([`ExpectimaxAgent`]).
//! [`ReflexAgent`] skips the tree and scores one-step successors directly.
//!
//! Each agent is invoked once per turn by the surrounding game loop and
//! returns a single chosen action; no state is shared between invocations.

pub mod alpha_beta;
pub mod config;
pub mod evaluation;
pub mod expectimax;
pub mod game_state;
pub mod minimax;
pub mod reflex;

#[cfg(test)]
pub(crate) mod testing;

pub use alpha_beta::AlphaBetaAgent;
pub use config::{AgentConfig, EvaluationKind};
pub use evaluation::{better_evaluation, score_evaluation};
pub use expectimax::ExpectimaxAgent;
pub use game_state::{GameState, GhostState, PACMAN, PacmanView};
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;

use crate::error::Result;

/// A decision-making agent queried once per turn.
///
/// Implementations compute the chosen action on demand from the given state
/// snapshot. A non-terminal state with no legal root action is a contract
/// violation and surfaces as [`crate::Error::NoLegalActions`].
pub trait Agent<G: GameState> {
    fn action(&mut self, state: &G) -> Result<G::Action>;
}
