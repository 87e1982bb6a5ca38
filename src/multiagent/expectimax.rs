//! Expectimax: minimax with chance nodes in place of minimizers.
//!
//! Ghosts are modeled as choosing uniformly at random among their legal
//! actions, so a ghost node is worth the arithmetic mean of its children
//! rather than their minimum.

use super::Agent;
use super::game_state::{GameState, PACMAN};
use crate::error::{Error, Result};

/// Expectimax agent for stochastic, non-adversarial opponents.
pub struct ExpectimaxAgent<E> {
    depth: u32,
    evaluation: E,
}

impl<E> ExpectimaxAgent<E> {
    /// Create an expectimax agent searching to the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSearchDepth`] if `depth` is zero.
    pub fn new(depth: u32, evaluation: E) -> Result<Self> {
        if depth == 0 {
            return Err(Error::InvalidSearchDepth { depth });
        }
        Ok(ExpectimaxAgent { depth, evaluation })
    }
}

impl<G, E> Agent<G> for ExpectimaxAgent<E>
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    fn action(&mut self, state: &G) -> Result<G::Action> {
        let actions = state.legal_actions(PACMAN);
        if actions.is_empty() {
            return Err(Error::NoLegalActions { agent: PACMAN });
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;
        for action in actions {
            let successor = state.generate_successor(PACMAN, &action);
            let value = chance_entry_value(&successor, self.depth, &self.evaluation);
            if best_action.is_none() || value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }

        Ok(best_action.expect("root action list is non-empty"))
    }
}

fn chance_entry_value<G, E>(state: &G, depth: u32, evaluation: &E) -> f64
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    if state.num_agents() == 1 {
        max_value(state, depth - 1, evaluation)
    } else {
        chance_value(state, depth, 1, evaluation)
    }
}

fn max_value<G, E>(state: &G, depth: u32, evaluation: &E) -> f64
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
        best = best.max(chance_entry_value(&successor, depth, evaluation));
    }
    best
}

fn chance_value<G, E>(state: &G, depth: u32, agent: usize, evaluation: &E) -> f64
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
    let mut total = 0.0;
    for action in &actions {
        let successor = state.generate_successor(agent, action);
        total += if agent == last_agent {
            max_value(&successor, depth - 1, evaluation)
        } else {
            chance_value(&successor, depth, agent + 1, evaluation)
        };
    }
    total / actions.len() as f64
}
