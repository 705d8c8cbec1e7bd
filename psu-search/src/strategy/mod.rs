mod first_choice;
mod hill_climbing;
mod local_beam;
mod n_states;
mod random_restart;
mod simulated_annealing;

#[doc(inline)]
pub use first_choice::FirstChoiceHillClimbing;
#[doc(inline)]
pub use first_choice::first_choice_climb;
#[doc(inline)]
pub use hill_climbing::Climb;
#[doc(inline)]
pub use hill_climbing::HillClimbing;
#[doc(inline)]
pub use hill_climbing::climb;
#[doc(inline)]
pub use local_beam::LocalBeamSearch;
#[doc(inline)]
pub use n_states::MAX_N_STATES;
#[doc(inline)]
pub use n_states::MIN_N_STATES;
#[doc(inline)]
pub use n_states::NStates;
#[doc(inline)]
pub use random_restart::RandomRestartHillClimbing;
#[doc(inline)]
pub use simulated_annealing::INITIAL_TEMPERATURE;
#[doc(inline)]
pub use simulated_annealing::SimulatedAnnealing;

use std::fmt::{Display, Formatter};

use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

use crate::SearchError;
use crate::entities::{Problem, State};
use crate::eval::{Cost, Report};

/// A local search strategy over a [`Problem`].
pub trait Strategy {
    /// Name of the strategy, without its parameters.
    fn name(&self) -> &'static str;

    /// Searches for a cheap state.
    fn run(&mut self) -> Result<StrategyResult, SearchError>;
}

/// Outcome of [`Strategy::run`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub state: State,
    pub cost: Cost,
    pub report: Report,
    /// `"({default: }{N} initial states)"`, only for parameterized strategies
    pub annotation: Option<String>,
    pub stats: SearchStats,
}

impl StrategyResult {
    pub fn new(
        problem: &Problem,
        state: State,
        stats: SearchStats,
        annotation: Option<String>,
    ) -> Self {
        Self {
            cost: problem.cost(&state),
            report: problem.report(&state),
            state,
            annotation,
            stats,
        }
    }

    /// `name` followed by the annotation, if any.
    pub fn label(&self, name: &str) -> String {
        match &self.annotation {
            Some(annotation) => format!("{name} {annotation}"),
            None => name.to_string(),
        }
    }
}

/// Counters collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations of the main loop: neighborhood scans, annealing steps, restarts or beam rounds
    pub n_steps: usize,
    /// Accepted moves
    pub n_moves: usize,
    /// Cost function evaluations
    pub n_evals: usize,
    /// Completed hill climbing descents
    pub n_descents: usize,
    /// Tracked cost after every accepted move (for the beam search: the summed beam cost per round)
    #[serde(skip)]
    pub trajectory: Vec<Cost>,
}

impl SearchStats {
    /// Adds the counters of `other`, the trajectory is left untouched.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.n_steps += other.n_steps;
        self.n_moves += other.n_moves;
        self.n_evals += other.n_evals;
        self.n_descents += other.n_descents;
    }
}

/// The available strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    HillClimbing,
    FirstChoiceHillClimbing,
    SimulatedAnnealing,
    RandomRestartHillClimbing,
    LocalBeamSearch,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::HillClimbing,
        StrategyKind::FirstChoiceHillClimbing,
        StrategyKind::SimulatedAnnealing,
        StrategyKind::RandomRestartHillClimbing,
        StrategyKind::LocalBeamSearch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::HillClimbing => "Hill Climbing",
            StrategyKind::FirstChoiceHillClimbing => "First Choice Hill Climbing",
            StrategyKind::SimulatedAnnealing => "Simulated Annealing",
            StrategyKind::RandomRestartHillClimbing => "Random Restart Hill Climbing",
            StrategyKind::LocalBeamSearch => "Local Beam Search",
        }
    }

    /// Whether the strategy takes a number of initial states.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            StrategyKind::RandomRestartHillClimbing | StrategyKind::LocalBeamSearch
        )
    }

    /// Creates an instance of the strategy over `problem`.
    /// `n_states` is the number of restarts or the beam width, ignored by the other strategies.
    pub fn build<'a>(
        &self,
        problem: &'a Problem,
        n_states: NStates,
        rng: SmallRng,
    ) -> Box<dyn Strategy + 'a> {
        match self {
            StrategyKind::HillClimbing => Box::new(HillClimbing::new(problem, rng)),
            StrategyKind::FirstChoiceHillClimbing => {
                Box::new(FirstChoiceHillClimbing::new(problem, rng))
            }
            StrategyKind::SimulatedAnnealing => Box::new(SimulatedAnnealing::new(problem, rng)),
            StrategyKind::RandomRestartHillClimbing => {
                Box::new(RandomRestartHillClimbing::new(problem, n_states, rng))
            }
            StrategyKind::LocalBeamSearch => {
                Box::new(LocalBeamSearch::new(problem, n_states, rng))
            }
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
