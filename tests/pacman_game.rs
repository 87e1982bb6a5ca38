//! The evaluation functions and the reflex agent on concrete game states.

use std::sync::Arc;

use pacsearch::{
    Agent, Direction, GameState, Layout, PACMAN, PacmanState, ReflexAgent, better_evaluation,
    score_evaluation,
};

fn state(text: &str) -> PacmanState {
    PacmanState::new(Arc::new(Layout::parse(text).unwrap()))
}

#[test]
fn score_evaluation_is_the_raw_score() {
    let game = state("%%%%\n%P.%\n%%%%");
    assert_eq!(score_evaluation(&game), 0.0);
    let next = game.generate_successor(PACMAN, &Direction::Stop);
    assert_eq!(score_evaluation(&next), next.score());
}

#[test]
fn closer_food_scores_higher() {
    // Same score and food count; only the distance to the pellet differs.
    let near = state("%%%%%%\n%P.  %\n%%%%%%");
    let far = state("%%%%%%\n%P  .%\n%%%%%%");
    assert!(better_evaluation(&near) > better_evaluation(&far));
}

#[test]
fn nearby_capsule_scores_higher() {
    let near = state("%%%%%%\n%Po .%\n%%%%%%");
    let far = state("%%%%%%\n%P o.%\n%%%%%%");
    assert!(better_evaluation(&near) > better_evaluation(&far));
}

#[test]
fn adjacent_dangerous_ghost_is_heavily_penalized() {
    let adjacent = state("%%%%%%\n%PG .%\n%%%%%%");
    let distant = state("%%%%%%\n%P G.%\n%%%%%%");
    assert!(better_evaluation(&adjacent) < better_evaluation(&distant) - 900.0);
}

#[test]
fn fewer_remaining_pellets_score_higher() {
    // Equal nearest-food distance, different pellet counts, zero score.
    let two_left = state("%%%%%%\n%P. .%\n%%%%%%");
    let one_left = state("%%%%%%\n%P.  %\n%%%%%%");
    assert!(better_evaluation(&one_left) > better_evaluation(&two_left));
}

/// The same board position reached with and without a capsule on the way:
/// a scared ghost one step away attracts, a dangerous one repels.
#[test]
fn scared_ghosts_attract_instead_of_repelling() {
    let with_capsule = state("%%%%%%%\n%P oG.%\n%%%%%%%");
    let without = state("%%%%%%%\n%P  G.%\n%%%%%%%");

    let scared = with_capsule
        .generate_successor(PACMAN, &Direction::East)
        .generate_successor(PACMAN, &Direction::East);
    let endangered = without
        .generate_successor(PACMAN, &Direction::East)
        .generate_successor(PACMAN, &Direction::East);

    assert_eq!(scared.score(), endangered.score());
    assert!(better_evaluation(&scared) > better_evaluation(&endangered) + 1000.0);
}

#[test]
fn reflex_agent_moves_toward_food() {
    let game = state("%%%%%%\n%  P.%\n%%%%%%");
    let mut agent = ReflexAgent::new(7);
    assert_eq!(agent.action(&game).unwrap(), Direction::East);
}

#[test]
fn reflex_agent_avoids_walking_into_a_ghost() {
    let game = state("%%%%%%%\n%. P G%\n%%%%%%%");
    let mut agent = ReflexAgent::new(7);
    assert_eq!(agent.action(&game).unwrap(), Direction::West);
}

#[test]
fn reflex_agent_is_deterministic_under_a_fixed_seed() {
    // Two pellets, one on each side: a pure tie broken by the seeded RNG.
    let game = state("%%%%%%%\n%. P .%\n%%%%%%%");
    let mut first = ReflexAgent::new(42);
    let mut second = ReflexAgent::new(42);
    assert_eq!(
        first.action(&game).unwrap(),
        second.action(&game).unwrap()
    );
}
