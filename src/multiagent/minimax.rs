//! Depth-limited minimax over the multi-agent turn sequence.

use super::Agent;
use super::game_state::{GameState, PACMAN};
use crate::error::{Error, Result};

/// Minimax agent: Pacman maximizes, every ghost minimizes.
///
/// One depth unit is a full round in which every agent moves once; depth
/// decrements on the transition from the last ghost back to Pacman. The
/// evaluation function is applied at wins, losses, and the depth cutoff.
pub struct MinimaxAgent<E> {
    depth: u32,
    evaluation: E,
}

impl<E> MinimaxAgent<E> {
    /// Create a minimax agent searching to the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSearchDepth`] if `depth` is zero.
    pub fn new(depth: u32, evaluation: E) -> Result<Self> {
        if depth == 0 {
            return Err(Error::InvalidSearchDepth { depth });
        }
        Ok(MinimaxAgent { depth, evaluation })
    }
}

impl<G, E> Agent<G> for MinimaxAgent<E>
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
            let value = opponent_value(&successor, self.depth, &self.evaluation);
            if best_action.is_none() || value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }

        Ok(best_action.expect("root action list is non-empty"))
    }
}

/// Value of the position after Pacman has moved: the first ghost responds,
/// or, in a ghost-free game, the round is already over.
fn opponent_value<G, E>(state: &G, depth: u32, evaluation: &E) -> f64
where
    G: GameState,
    E: Fn(&G) -> f64,
{
    if state.num_agents() == 1 {
        max_value(state, depth - 1, evaluation)
    } else {
        min_value(state, depth, 1, evaluation)
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
        best = best.max(opponent_value(&successor, depth, evaluation));
    }
    best
}

fn min_value<G, E>(state: &G, depth: u32, agent: usize, evaluation: &E) -> f64
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
            max_value(&successor, depth - 1, evaluation)
        } else {
            min_value(&successor, depth, agent + 1, evaluation)
        };
        best = best.min(value);
    }
    best
}
