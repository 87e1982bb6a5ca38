//! Configuration for building tree-search agents.

use serde::{Deserialize, Serialize};

/// Which evaluation function an agent applies at leaves and cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    /// The raw game score.
    #[default]
    Score,
    /// The hand-tuned board evaluation
    /// ([`better_evaluation`](super::evaluation::better_evaluation)).
    Better,
}

/// Configuration for creating a tree-search agent.
///
/// # Examples
///
/// ```
/// use pacsearch::multiagent::{AgentConfig, EvaluationKind};
///
/// let config = AgentConfig::new(2)
///     .with_evaluation(EvaluationKind::Better)
///     .with_seed(42);
/// assert_eq!(config.depth, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Search depth in full agent rounds.
    pub depth: u32,
    /// Evaluation function applied at leaves and cutoffs.
    pub evaluation: EvaluationKind,
    /// Random seed for agents with stochastic tie-breaking.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the given search depth.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            evaluation: EvaluationKind::default(),
            seed: None,
        }
    }

    /// Set the evaluation function.
    pub fn with_evaluation(mut self, evaluation: EvaluationKind) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
