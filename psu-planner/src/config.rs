use psu_search::strategy::NStates;
use serde::{Deserialize, Serialize};

/// Configuration for the planner
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Seed for the PRNG. If undefined, the strategies will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of descents of random restart hill climbing, free-form text
    #[serde(default = "default_n_states")]
    pub n_restarts: String,
    /// Number of states local beam search advances in parallel, free-form text
    #[serde(default = "default_n_states")]
    pub beam_width: String,
}

impl PlannerConfig {
    pub fn n_restarts(&self) -> NStates {
        NStates::parse(&self.n_restarts)
    }

    pub fn beam_width(&self) -> NStates {
        NStates::parse(&self.beam_width)
    }
}

fn default_n_states() -> String {
    "10".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_restarts: default_n_states(),
            beam_width: default_n_states(),
        }
    }
}
