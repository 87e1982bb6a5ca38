//! The four graph-search algorithms, sharing one traversal skeleton.

use std::collections::HashSet;

use super::frontier::{FifoFrontier, Frontier, LifoFrontier, MinPriorityFrontier, SearchNode};
use super::problem::{SearchProblem, null_heuristic};

/// Graph search over the explored region of the problem's state space.
///
/// Maintains a frontier of (state, path, cost) entries and a visited set.
/// Entries are pushed unconditionally for states not yet expanded; duplicate
/// entries that linger in the frontier are discarded when popped (lazy
/// deletion). Priorities are `accumulated cost + heuristic(successor)`; the
/// LIFO and FIFO frontiers ignore them.
///
/// Returns `Some(path)` when a goal is reached (an empty path exactly when
/// the start state is itself a goal) and `None` when the frontier exhausts
/// without reaching one.
fn graph_search<P, F, H>(problem: &P, mut frontier: F, heuristic: H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    F: Frontier<P::State, P::Action>,
    H: Fn(&P::State, &P) -> f64,
{
    let start = problem.starting_state();
    let start_priority = heuristic(&start, problem);
    frontier.push(
        SearchNode {
            state: start,
            path: Vec::new(),
            cost: 0.0,
        },
        start_priority,
    );

    let mut visited: HashSet<P::State> = HashSet::new();

    while let Some(entry) = frontier.pop() {
        if visited.contains(&entry.state) {
            continue;
        }
        visited.insert(entry.state.clone());

        if problem.is_goal(&entry.state) {
            return Some(entry.path);
        }

        for successor in problem.successor_states(&entry.state) {
            if visited.contains(&successor.state) {
                continue;
            }
            let cost = entry.cost + successor.cost;
            let mut path = entry.path.clone();
            path.push(successor.action);
            let priority = cost + heuristic(&successor.state, problem);
            frontier.push(
                SearchNode {
                    state: successor.state,
                    path,
                    cost,
                },
                priority,
            );
        }
    }

    None
}

/// Search the deepest nodes first.
///
/// Returns some valid path to a goal, not necessarily a shortest one.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, LifoFrontier::new(), null_heuristic)
}

/// Search the shallowest nodes first.
///
/// Returns a path with the fewest actions when all step costs are equal.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, FifoFrontier::new(), null_heuristic)
}

/// Search the node of least total path cost first.
///
/// Returns a minimum-total-cost path.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, MinPriorityFrontier::new(), null_heuristic)
}

/// Search the node with the lowest combined cost and heuristic first.
///
/// Returns a minimum-total-cost path when the heuristic is admissible and
/// consistent. With [`null_heuristic`] this is uniform-cost search.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    graph_search(problem, MinPriorityFrontier::new(), heuristic)
}
