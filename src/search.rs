//! Generic uninformed and informed graph search.
//!
//! Four interchangeable strategies over one traversal skeleton: depth-first,
//! breadth-first, uniform-cost, and A*. All operate on the abstract
//! [`SearchProblem`] interface and return the action path to a goal, or
//! `None` when no goal is reachable from the start state.

pub mod algorithms;
pub mod frontier;
pub mod problem;

pub use algorithms::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search,
};
pub use problem::{SearchProblem, Successor, null_heuristic};
