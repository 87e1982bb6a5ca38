//! A tiny two-agent matrix game for agent unit tests.
//!
//! Pacman picks a row, the single ghost picks a column, and the chosen cell
//! is the final score. Two plies are exactly one search round, which keeps
//! the depth-1 agent behavior easy to state by hand.

use super::game_state::GameState;

#[derive(Clone)]
pub(crate) struct MatrixGame {
    payoffs: Vec<Vec<f64>>,
    row: Option<usize>,
    column: Option<usize>,
}

impl MatrixGame {
    pub(crate) fn new(payoffs: Vec<Vec<f64>>) -> Self {
        MatrixGame {
            payoffs,
            row: None,
            column: None,
        }
    }
}

impl GameState for MatrixGame {
    type Action = usize;

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        match (self.row, self.column) {
            (None, _) => (0..self.payoffs.len()).collect(),
            (Some(row), None) => (0..self.payoffs[row].len()).collect(),
            (Some(_), Some(_)) => Vec::new(),
        }
    }

    fn generate_successor(&self, _agent: usize, action: &usize) -> Self {
        let mut next = self.clone();
        if next.row.is_none() {
            next.row = Some(*action);
        } else {
            next.column = Some(*action);
        }
        next
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        2
    }

    fn score(&self) -> f64 {
        match (self.row, self.column) {
            (Some(row), Some(column)) => self.payoffs[row][column],
            _ => 0.0,
        }
    }
}
