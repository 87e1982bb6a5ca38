//! Search problems over maze layouts.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::grid::{Direction, Position};
use crate::search::{SearchProblem, Successor};

use super::layout::Layout;

/// Reach a target cell from a start cell; every step costs one.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem {
    layout: Arc<Layout>,
    start: Position,
    goal: Position,
}

impl PositionSearchProblem {
    /// Create a problem between two open cells of the layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] or [`Error::WallPosition`] if either
    /// endpoint is not an open cell.
    pub fn new(layout: Arc<Layout>, start: Position, goal: Position) -> Result<Self> {
        for position in [start, goal] {
            if !layout.in_bounds(position) {
                return Err(Error::OutOfBounds {
                    x: position.x,
                    y: position.y,
                });
            }
            if layout.is_wall(position) {
                return Err(Error::WallPosition {
                    x: position.x,
                    y: position.y,
                });
            }
        }
        Ok(PositionSearchProblem {
            layout,
            start,
            goal,
        })
    }

    /// The target cell.
    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn starting_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::MOVES
            .iter()
            .copied()
            .filter_map(|direction| {
                let next = state.step(direction);
                if self.layout.is_wall(next) {
                    None
                } else {
                    Some(Successor::new(next, direction, 1.0))
                }
            })
            .collect()
    }
}

/// Manhattan distance to the goal. Admissible and consistent on unit-cost
/// grids, so A* with it stays optimal.
pub fn manhattan_heuristic(state: &Position, problem: &PositionSearchProblem) -> f64 {
    state.manhattan_distance(problem.goal()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{a_star_search, breadth_first_search};

    const MAZE: &str = "\
%%%%%%%
%P  % %
% %   %
% % % %
%   %.%
%%%%%%%";

    fn problem() -> PositionSearchProblem {
        let layout = Arc::new(Layout::parse(MAZE).unwrap());
        let start = layout.pacman_start;
        let goal = layout.food[0];
        PositionSearchProblem::new(layout, start, goal).unwrap()
    }

    #[test]
    fn endpoints_must_be_open_cells() {
        let layout = Arc::new(Layout::parse(MAZE).unwrap());
        let open = layout.pacman_start;
        assert!(matches!(
            PositionSearchProblem::new(Arc::clone(&layout), Position::new(0, 0), open),
            Err(Error::WallPosition { x: 0, y: 0 })
        ));
        assert!(matches!(
            PositionSearchProblem::new(layout, open, Position::new(-3, 2)),
            Err(Error::OutOfBounds { x: -3, y: 2 })
        ));
    }

    #[test]
    fn a_star_with_manhattan_matches_breadth_first_length() {
        let problem = problem();
        let bfs = breadth_first_search(&problem).unwrap();
        let a_star = a_star_search(&problem, manhattan_heuristic).unwrap();
        assert_eq!(a_star.len(), bfs.len());
    }

    #[test]
    fn heuristic_never_overestimates_on_the_solved_path() {
        let problem = problem();
        let path = breadth_first_search(&problem).unwrap();
        let mut state = problem.starting_state();
        let mut remaining = path.len();
        for action in path {
            assert!(manhattan_heuristic(&state, &problem) <= remaining as f64);
            state = state.step(action);
            remaining -= 1;
        }
        assert!(problem.is_goal(&state));
    }
}
