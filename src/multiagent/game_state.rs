//! The game-state capability surface the agents consume.

use crate::grid::Position;

/// Pacman's agent index. Ghosts occupy indices `1..num_agents`.
pub const PACMAN: usize = 0;

/// A multi-agent, turn-taking game state.
///
/// Agents move in index order: Pacman (agent 0) first, then each ghost in
/// turn. States are immutable snapshots; `generate_successor` produces a new
/// state rather than mutating in place.
pub trait GameState: Clone {
    type Action: Clone;

    /// Legal actions for the given agent. Empty in terminal states.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after the given agent takes the given action.
    fn generate_successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Whether this state is a win for Pacman.
    fn is_win(&self) -> bool;

    /// Whether this state is a loss for Pacman.
    fn is_lose(&self) -> bool;

    /// Total number of agents, Pacman included.
    fn num_agents(&self) -> usize;

    /// The game score accumulated so far.
    fn score(&self) -> f64;
}

/// A ghost as seen by the evaluation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    pub position: Position,
    /// Remaining moves for which this ghost is vulnerable. Zero means the
    /// ghost is dangerous.
    pub scared_timer: u32,
}

impl GhostState {
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// The board features the hand-tuned evaluation functions read.
pub trait PacmanView: GameState {
    /// Pacman's current cell.
    fn pacman_position(&self) -> Position;

    /// Remaining food pellets, in a deterministic order.
    fn food(&self) -> Vec<Position>;

    /// Remaining power capsules, in a deterministic order.
    fn capsules(&self) -> Vec<Position>;

    /// All ghosts, indexed in agent order.
    fn ghost_states(&self) -> Vec<GhostState>;
}
