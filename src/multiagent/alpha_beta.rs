//! Minimax with alpha-beta pruning.
//!
//! Pruning only skips subtrees proven irrelevant to the root decision: for
//! any deterministic finite game tree and depth, this agent returns the same
//! root action as [`MinimaxAgent`](super::MinimaxAgent).

use super::Agent;
use super::game_state::{GameState, PACMAN};
use crate::error::{Error, Result};

/// Alpha-beta agent: minimax semantics with branch-and-bound cutoffs.
pub struct AlphaBetaAgent<E> {
    depth: u32,
    evaluation: E,
}

impl<E> AlphaBetaAgent<E> {
    /// Create an alpha-beta agent searching to the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSearchDepth`] if `depth` is zero.
    pub fn new(depth: u32, evaluation: E) -> Result<Self> {
        if depth == 0 {
            return Err(Error::InvalidSearchDepth { depth });
        }
        Ok(AlphaBetaAgent { depth, evaluation })
    }
}

impl<G, E> Agent<G> for AlphaBetaAgent<E>
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    fn action(&mut self, state: &G) -> Result<G::Action> {
        let actions = state.legal_actions(PACMAN);
        if actions.is_empty() {
            return Err(Error::NoLegalActions { agent: PACMAN });
        }

        // The root is a max node with open bounds; beta stays +inf, so no
        // cutoff can fire here, but alpha tightens as actions are scored.
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in actions {
            let successor = state.generate_successor(PACMAN, &action);
            let value = opponent_value(&successor, self.depth, alpha, beta, &self.evaluation);
            if best_action.is_none() || value > best_value {
                best_value = value;
                best_action = Some(action);
            }
            alpha = alpha.max(best_value);
        }

        Ok(best_action.expect("root action list is non-empty"))
    }
}

fn opponent_value<G, E>(state: &G, depth: u32, alpha: f64, beta: f64, evaluation: &E) -> f64
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    if state.num_agents() == 1 {
        max_value(state, depth - 1, alpha, beta, evaluation)
    } else {
        min_value(state, depth, 1, alpha, beta, evaluation)
    }
}

fn max_value<G, E>(state: &G, depth: u32, mut alpha: f64, beta: f64, evaluation: &E) -> f64
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    if depth == 0 || state.is_win() || state.is_lose() {
        return evaluation(state);
    }
    let actions = state.legal_actions(PACMAN);
    if actions.is_empty() {
        return evaluation(state);
    }

    let mut best = f64::NEG_INFINITY;
    for action in &actions {
        let successor = state.generate_successor(PACMAN, action);
        best = best.max(opponent_value(&successor, depth, alpha, beta, evaluation));
        if best >= beta {
            return best;
        }
        alpha = alpha.max(best);
    }
    best
}

fn min_value<G, E>(
    state: &G,
    depth: u32,
    agent: usize,
    alpha: f64,
    mut beta: f64,
    evaluation: &E,
) -> f64
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    if depth == 0 || state.is_win() || state.is_lose() {
        return evaluation(state);
    }
    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return evaluation(state);
    }

    let last_agent = state.num_agents() - 1;
    let mut best = f64::INFINITY;
    for action in &actions {
        let successor = state.generate_successor(agent, action);
        let value = if agent == last_agent {
            max_value(&successor, depth - 1, alpha, beta, evaluation)
        } else {
            min_value(&successor, depth, agent + 1, alpha, beta, evaluation)
        };
        best = best.min(value);
        if best <= alpha {
            return best;
        }
        beta = beta.min(best);
    }
    best
}
