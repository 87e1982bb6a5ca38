//! The concrete grid pursuit game: layouts, game states, and the maze
//! search problems defined over them.

pub mod layout;
pub mod maze;
pub mod state;

pub use layout::Layout;
pub use maze::{PositionSearchProblem, manhattan_heuristic};
pub use state::{GameOutcome, PacmanState};
