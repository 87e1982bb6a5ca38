//! The abstract search-problem interface the algorithms operate on.

use std::hash::Hash;

/// One discovered edge out of a state: the successor state, the action that
/// reaches it, and the step cost of taking that action.
#[derive(Debug, Clone)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    /// Create a new successor edge.
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Successor {
            state,
            action,
            cost,
        }
    }
}

/// A search problem over an abstract state space.
///
/// States are opaque values whose equality defines node identity for
/// duplicate elimination; the algorithms never mutate them. Implementations
/// own the state space and the goal test.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search starts from.
    fn starting_state(&self) -> Self::State;

    /// Whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All edges out of the given state.
    fn successor_states(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}

/// The trivial heuristic. A* with this heuristic behaves exactly like
/// uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}
