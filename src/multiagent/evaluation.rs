//! State evaluation functions for depth-limited game-tree search.
//!
//! Evaluation functions are plain `Fn(&G) -> f64` values, so agents compose
//! with any scoring function. These are heuristics: their quality affects
//! play strength only, never termination.

use super::game_state::{GameState, PacmanView};

/// The raw game score. Default evaluation for the tree-search agents.
pub fn score_evaluation<G: GameState>(state: &G) -> f64 {
    state.score()
}

/// Hand-tuned evaluation combining score, food and capsule proximity, ghost
/// threat, and remaining food count.
///
/// - `+10 / (d + 1)` for the nearest food pellet at Manhattan distance `d`
/// - `+50 / (d + 1)` for the nearest power capsule
/// - `+200 / (d + 1)` for each scared ghost
/// - `-1000` for each dangerous ghost within Manhattan distance 1
/// - `-5` per remaining food pellet, so finishing the level stays attractive
pub fn better_evaluation<G: PacmanView>(state: &G) -> f64 {
    let position = state.pacman_position();
    let food = state.food();
    let mut value = state.score();

    if let Some(distance) = food
        .iter()
        .map(|pellet| position.manhattan_distance(*pellet))
        .min()
    {
        value += 10.0 / (distance as f64 + 1.0);
    }

    if let Some(distance) = state
        .capsules()
        .iter()
        .map(|capsule| position.manhattan_distance(*capsule))
        .min()
    {
        value += 50.0 / (distance as f64 + 1.0);
    }

    for ghost in state.ghost_states() {
        let distance = position.manhattan_distance(ghost.position);
        if ghost.is_scared() {
            value += 200.0 / (distance as f64 + 1.0);
        } else if distance < 2 {
            value -= 1000.0;
        }
    }

    value - 5.0 * food.len() as f64
}
