//! Frontier orderings for the graph-search skeleton.
//!
//! The four search algorithms differ only in which discovered entry they
//! expand next. That ordering lives here: a LIFO stack for depth-first, a
//! FIFO queue for breadth-first, and a min-priority heap for uniform-cost
//! and A*. Entries popped in stale order are filtered by the caller (lazy
//! deletion), so frontiers never need to re-prioritize or remove entries.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A discovered-but-not-yet-expanded entry: the state, the action path that
/// reached it, and the accumulated path cost.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub path: Vec<A>,
    pub cost: f64,
}

/// Ordering strategy over frontier entries.
///
/// `push` takes the priority the skeleton computed for the entry
/// (accumulated cost plus heuristic); the LIFO and FIFO frontiers ignore it.
pub trait Frontier<S, A> {
    fn push(&mut self, node: SearchNode<S, A>, priority: f64);
    fn pop(&mut self) -> Option<SearchNode<S, A>>;
}

/// Last-in-first-out frontier: depth-first expansion order.
#[derive(Debug)]
pub struct LifoFrontier<S, A> {
    stack: Vec<SearchNode<S, A>>,
}

impl<S, A> LifoFrontier<S, A> {
    pub fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }
}

impl<S, A> Default for LifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Frontier<S, A> for LifoFrontier<S, A> {
    fn push(&mut self, node: SearchNode<S, A>, _priority: f64) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode<S, A>> {
        self.stack.pop()
    }
}

/// First-in-first-out frontier: breadth-first expansion order.
#[derive(Debug)]
pub struct FifoFrontier<S, A> {
    queue: VecDeque<SearchNode<S, A>>,
}

impl<S, A> FifoFrontier<S, A> {
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<S, A> Default for FifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Frontier<S, A> for FifoFrontier<S, A> {
    fn push(&mut self, node: SearchNode<S, A>, _priority: f64) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode<S, A>> {
        self.queue.pop_front()
    }
}

/// Min-priority frontier: uniform-cost and A* expansion order.
///
/// Ties on priority break in insertion order so results are deterministic
/// across runs.
#[derive(Debug)]
pub struct MinPriorityFrontier<S, A> {
    heap: BinaryHeap<PrioritizedNode<S, A>>,
    sequence: u64,
}

impl<S, A> MinPriorityFrontier<S, A> {
    pub fn new() -> Self {
        MinPriorityFrontier {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<S, A> Default for MinPriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Frontier<S, A> for MinPriorityFrontier<S, A> {
    fn push(&mut self, node: SearchNode<S, A>, priority: f64) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.heap.push(PrioritizedNode {
            priority,
            sequence,
            node,
        });
    }

    fn pop(&mut self) -> Option<SearchNode<S, A>> {
        self.heap.pop().map(|entry| entry.node)
    }
}

/// Heap entry wrapper inverting the ordering so the max-heap pops the
/// smallest priority first.
#[derive(Debug)]
struct PrioritizedNode<S, A> {
    priority: f64,
    sequence: u64,
    node: SearchNode<S, A>,
}

impl<S, A> PartialEq for PrioritizedNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, A> Eq for PrioritizedNode<S, A> {}

impl<S, A> PartialOrd for PrioritizedNode<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for PrioritizedNode<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
