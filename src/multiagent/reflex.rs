//! A reflex agent that scores one-step successors instead of searching.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use super::Agent;
use super::game_state::{GameState, PACMAN, PacmanView};
use crate::error::{Error, Result};

/// Chooses the legal action whose immediate successor scores best under a
/// one-step evaluation, breaking ties uniformly at random.
pub struct ReflexAgent {
    rng: StdRng,
}

impl ReflexAgent {
    /// Create a reflex agent with a seeded tie-breaking RNG.
    pub fn new(seed: u64) -> Self {
        ReflexAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G> Agent<G> for ReflexAgent
where
    G: PacmanView,
{
    fn action(&mut self, state: &G) -> Result<G::Action> {
        let actions = state.legal_actions(PACMAN);
        if actions.is_empty() {
            return Err(Error::NoLegalActions { agent: PACMAN });
        }

        let scored: Vec<(G::Action, f64)> = actions
            .into_iter()
            .map(|action| {
                let successor = state.generate_successor(PACMAN, &action);
                let value = successor_score(&successor);
                (action, value)
            })
            .collect();

        let best = scored
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_actions: Vec<G::Action> = scored
            .into_iter()
            .filter(|(_, value)| *value == best)
            .map(|(action, _)| action)
            .collect();

        let choice = best_actions
            .choose(&mut self.rng)
            .expect("tied-best action list is non-empty");
        Ok(choice.clone())
    }
}

/// One-step evaluation of a successor state: its score, a bonus for closing
/// in on food, a bonus for chasing scared ghosts, and a heavy penalty for
/// standing next to a dangerous one.
fn successor_score<G: PacmanView>(successor: &G) -> f64 {
    let position = successor.pacman_position();
    let mut value = successor.score();

    if let Some(distance) = successor
        .food()
        .iter()
        .map(|pellet| position.manhattan_distance(*pellet))
        .min()
    {
        value += 10.0 / (distance as f64 + 1.0);
    }

    for ghost in successor.ghost_states() {
        let distance = position.manhattan_distance(ghost.position);
        if ghost.is_scared() {
            value += 200.0 / (distance as f64 + 1.0);
        } else if distance < 2 {
            value -= 1000.0;
        }
    }

    value
}
