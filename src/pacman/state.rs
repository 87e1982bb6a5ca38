//! The grid pursuit-game state.
//!
//! A deliberately compact rule set covering exactly what the decision logic
//! observes: movement, food and capsules, scared timers, collisions, and the
//! score. The layout is shared between states, so cloning a state per
//! successor stays cheap.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::grid::{Direction, Position};
use crate::multiagent::game_state::{GameState, GhostState, PACMAN};

use super::layout::Layout;

/// Points for eating one food pellet.
const FOOD_SCORE: f64 = 10.0;
/// Bonus for clearing the last pellet.
const WIN_SCORE: f64 = 500.0;
/// Points for eating a scared ghost.
const GHOST_SCORE: f64 = 200.0;
/// Penalty for being caught.
const LOSE_PENALTY: f64 = 500.0;
/// Cost of every Pacman move.
const TIME_PENALTY: f64 = 1.0;
/// Ghost moves a capsule keeps ghosts vulnerable for.
const SCARED_MOVES: u32 = 40;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy)]
struct Ghost {
    position: Position,
    home: Position,
    scared_timer: u32,
}

/// An immutable snapshot of a game in progress.
#[derive(Debug, Clone)]
pub struct PacmanState {
    layout: Arc<Layout>,
    pacman: Position,
    ghosts: Vec<Ghost>,
    food: BTreeSet<Position>,
    capsules: Vec<Position>,
    score: f64,
    outcome: Option<GameOutcome>,
}

impl PacmanState {
    /// The starting state of a game on the given layout.
    pub fn new(layout: Arc<Layout>) -> Self {
        let food = layout.food.iter().copied().collect();
        let capsules = layout.capsules.clone();
        let pacman = layout.pacman_start;
        let ghosts = layout
            .ghost_starts
            .iter()
            .map(|&home| Ghost {
                position: home,
                home,
                scared_timer: 0,
            })
            .collect();
        PacmanState {
            layout,
            pacman,
            ghosts,
            food,
            capsules,
            score: 0.0,
            outcome: None,
        }
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn assert_agent_in_range(&self, agent: usize) {
        assert!(
            agent < self.num_agents(),
            "agent index {agent} out of range: game has {} agents",
            self.num_agents()
        );
    }

    fn apply_pacman_move(&mut self, action: Direction) {
        let target = self.pacman.step(action);
        assert!(
            !self.layout.is_wall(target),
            "illegal Pacman move {action} into a wall at {target}"
        );
        self.score -= TIME_PENALTY;
        self.pacman = target;

        // A dangerous ghost on the target cell ends the game before anything
        // is eaten.
        let caught = self
            .ghosts
            .iter()
            .any(|ghost| ghost.position == target && ghost.scared_timer == 0);
        if caught {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(GameOutcome::Lose);
            return;
        }

        for ghost in &mut self.ghosts {
            if ghost.position == target && ghost.scared_timer > 0 {
                self.score += GHOST_SCORE;
                ghost.position = ghost.home;
                ghost.scared_timer = 0;
            }
        }

        if self.food.remove(&target) {
            self.score += FOOD_SCORE;
            if self.food.is_empty() {
                self.score += WIN_SCORE;
                self.outcome = Some(GameOutcome::Win);
            }
        }

        if let Some(index) = self.capsules.iter().position(|&c| c == target) {
            self.capsules.remove(index);
            for ghost in &mut self.ghosts {
                ghost.scared_timer = SCARED_MOVES;
            }
        }
    }

    fn apply_ghost_move(&mut self, agent: usize, action: Direction) {
        let index = agent - 1;
        let target = self.ghosts[index].position.step(action);
        assert!(
            action != Direction::Stop,
            "ghosts may not stop (agent {agent})"
        );
        assert!(
            !self.layout.is_wall(target),
            "illegal ghost move {action} into a wall at {target}"
        );

        let ghost = &mut self.ghosts[index];
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        ghost.position = target;

        if target == self.pacman {
            if self.ghosts[index].scared_timer > 0 {
                self.score += GHOST_SCORE;
                self.ghosts[index].position = self.ghosts[index].home;
                self.ghosts[index].scared_timer = 0;
            } else {
                self.score -= LOSE_PENALTY;
                self.outcome = Some(GameOutcome::Lose);
            }
        }
    }
}

impl GameState for PacmanState {
    type Action = Direction;

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        self.assert_agent_in_range(agent);
        if self.outcome.is_some() {
            return Vec::new();
        }

        if agent == PACMAN {
            let mut actions = vec![Direction::Stop];
            actions.extend(
                Direction::MOVES
                    .iter()
                    .copied()
                    .filter(|direction| !self.layout.is_wall(self.pacman.step(*direction))),
            );
            actions
        } else {
            let position = self.ghosts[agent - 1].position;
            Direction::MOVES
                .iter()
                .copied()
                .filter(|direction| !self.layout.is_wall(position.step(*direction)))
                .collect()
        }
    }

    /// # Panics
    ///
    /// Panics if the state is terminal, the agent index is out of range, or
    /// the action is illegal for that agent. These are contract violations
    /// in the caller, not recoverable conditions.
    fn generate_successor(&self, agent: usize, action: &Direction) -> Self {
        self.assert_agent_in_range(agent);
        assert!(
            self.outcome.is_none(),
            "generate_successor called on a terminal state"
        );

        let mut next = self.clone();
        if agent == PACMAN {
            next.apply_pacman_move(*action);
        } else {
            next.apply_ghost_move(agent, *action);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(GameOutcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(GameOutcome::Lose)
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl crate::multiagent::PacmanView for PacmanState {
    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn capsules(&self) -> Vec<Position> {
        self.capsules.clone()
    }

    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts
            .iter()
            .map(|ghost| GhostState {
                position: ghost.position,
                scared_timer: ghost.scared_timer,
            })
            .collect()
    }
}

impl fmt::Display for PacmanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.layout.height {
            for x in 0..self.layout.width {
                let position = Position::new(x, y);
                let cell = if position == self.pacman {
                    'P'
                } else if let Some(ghost) =
                    self.ghosts.iter().find(|ghost| ghost.position == position)
                {
                    if ghost.scared_timer > 0 { 'g' } else { 'G' }
                } else if self.layout.is_wall(position) {
                    '%'
                } else if self.food.contains(&position) {
                    '.'
                } else if self.capsules.contains(&position) {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
