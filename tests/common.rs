//! Shared fixtures for the integration test suites: an explicit directed
//! graph search problem and a hand-built game tree with assignable leaf
//! values.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use pacsearch::{GameState, SearchProblem, Successor};

/// An explicit directed graph: states are labels, edges carry an action
/// character and a step cost.
pub struct GraphProblem {
    start: &'static str,
    goals: HashSet<&'static str>,
    edges: HashMap<&'static str, Vec<(char, &'static str, f64)>>,
}

impl GraphProblem {
    pub fn new(start: &'static str) -> Self {
        GraphProblem {
            start,
            goals: HashSet::new(),
            edges: HashMap::new(),
        }
    }

    pub fn goal(mut self, state: &'static str) -> Self {
        self.goals.insert(state);
        self
    }

    pub fn edge(
        mut self,
        from: &'static str,
        action: char,
        to: &'static str,
        cost: f64,
    ) -> Self {
        self.edges.entry(from).or_default().push((action, to, cost));
        self
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = char;

    fn starting_state(&self) -> &'static str {
        self.start
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successor_states(&self, state: &&'static str) -> Vec<Successor<&'static str, char>> {
        self.edges
            .get(state)
            .into_iter()
            .flatten()
            .map(|(action, next, cost)| Successor::new(*next, *action, *cost))
            .collect()
    }
}

/// Walk a returned path through `successor_states` and report whether it
/// ends in a goal state.
pub fn path_reaches_goal<P>(problem: &P, path: &[P::Action]) -> bool
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut state = problem.starting_state();
    for action in path {
        let successors = problem.successor_states(&state);
        let Some(next) = successors
            .into_iter()
            .find(|successor| successor.action == *action)
        else {
            return false;
        };
        state = next.state;
    }
    problem.is_goal(&state)
}

/// A game state backed by an explicit tree. Interior nodes list their child
/// edges; leaves carry a fixed value surfaced through `score()`. Whose turn
/// it is at a node is implied by tree depth, so the agent index passed to
/// `legal_actions` is ignored.
#[derive(Clone)]
pub struct TreeGame {
    node: &'static str,
    spec: Arc<TreeSpec>,
}

struct TreeSpec {
    num_agents: usize,
    children: HashMap<&'static str, Vec<(&'static str, &'static str)>>,
    leaves: HashMap<&'static str, f64>,
}

impl TreeGame {
    pub fn builder(num_agents: usize) -> TreeGameBuilder {
        TreeGameBuilder {
            num_agents,
            children: HashMap::new(),
            leaves: HashMap::new(),
        }
    }
}

impl GameState for TreeGame {
    type Action = &'static str;

    fn legal_actions(&self, _agent: usize) -> Vec<&'static str> {
        self.spec
            .children
            .get(self.node)
            .map(|edges| edges.iter().map(|(action, _)| *action).collect())
            .unwrap_or_default()
    }

    fn generate_successor(&self, _agent: usize, action: &&'static str) -> Self {
        let edges = self
            .spec
            .children
            .get(self.node)
            .expect("successor requested at a leaf");
        let (_, child) = edges
            .iter()
            .find(|(candidate, _)| candidate == action)
            .expect("action is an edge of this node");
        TreeGame {
            node: child,
            spec: Arc::clone(&self.spec),
        }
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.spec.num_agents
    }

    fn score(&self) -> f64 {
        self.spec.leaves.get(self.node).copied().unwrap_or(0.0)
    }
}

pub struct TreeGameBuilder {
    num_agents: usize,
    children: HashMap<&'static str, Vec<(&'static str, &'static str)>>,
    leaves: HashMap<&'static str, f64>,
}

impl TreeGameBuilder {
    /// Declare the edges out of `node` as (action, child) pairs.
    pub fn children(mut self, node: &'static str, edges: &[(&'static str, &'static str)]) -> Self {
        self.children.insert(node, edges.to_vec());
        self
    }

    /// Assign a leaf value, surfaced through `score()`.
    pub fn leaf(mut self, node: &'static str, value: f64) -> Self {
        self.leaves.insert(node, value);
        self
    }

    /// Finish the tree, rooted at `"root"`.
    pub fn build(self) -> TreeGame {
        TreeGame {
            node: "root",
            spec: Arc::new(TreeSpec {
                num_agents: self.num_agents,
                children: self.children,
                leaves: self.leaves,
            }),
        }
    }
}
