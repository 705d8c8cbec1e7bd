use std::time::Instant;

use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::SearchError;
use crate::entities::{Problem, State};
use crate::eval::Cost;
use crate::neighborhood::{best_improvement, n_neighbors, neighbors_iter};
use crate::strategy::{SearchStats, Strategy, StrategyKind, StrategyResult};
use crate::util::assertions;

/// Terminal state of a single descent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Climb {
    pub state: State,
    pub cost: Cost,
    pub stats: SearchStats,
}

/// Steepest descent from `start`: repeatedly moves to the cheapest neighbor
/// until no neighbor is strictly cheaper.
///
/// Deterministic for a given start. The result is a fixed point of
/// [`best_neighbor`](crate::neighborhood::best_neighbor).
pub fn climb(problem: &Problem, start: State) -> Climb {
    let Problem {
        inventory, order, ..
    } = problem;
    debug_assert!(assertions::state_is_valid(&start, inventory, order));

    let mut state = start;
    let mut current = problem.cost(&state);
    let mut stats = SearchStats {
        n_evals: 1,
        n_descents: 1,
        trajectory: vec![current],
        ..SearchStats::default()
    };

    loop {
        stats.n_steps += 1;
        stats.n_evals += n_neighbors(&state, inventory);
        match best_improvement(neighbors_iter(&state, inventory), inventory, order, current) {
            Some((next, next_cost)) => {
                debug!("[HC] move {}: cost {current} -> {next_cost}", stats.n_moves);
                state = next;
                current = next_cost;
                stats.n_moves += 1;
                stats.trajectory.push(current);
            }
            None => break,
        }
    }

    Climb {
        state,
        cost: current,
        stats,
    }
}

/// Steepest descent hill climbing from a random (or given) initial state.
pub struct HillClimbing<'a> {
    pub problem: &'a Problem,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    start: Option<State>,
}

impl<'a> HillClimbing<'a> {
    pub fn new(problem: &'a Problem, rng: SmallRng) -> Self {
        Self {
            problem,
            rng,
            start: None,
        }
    }

    /// Starts the next run from `start` instead of a random initial state.
    pub fn with_start(mut self, start: State) -> Self {
        self.start = Some(start);
        self
    }
}

impl Strategy for HillClimbing<'_> {
    fn name(&self) -> &'static str {
        StrategyKind::HillClimbing.name()
    }

    fn run(&mut self) -> Result<StrategyResult, SearchError> {
        let start_time = Instant::now();
        let start = match self.start.take() {
            Some(start) => start,
            None => self.problem.initial_state(&mut self.rng)?,
        };

        let Climb { state, cost, stats } = climb(self.problem, start);

        info!(
            "[HC] finished in {:.3}ms: cost {cost} after {} moves ({} evaluations)",
            start_time.elapsed().as_secs_f64() * 1000.0,
            stats.n_moves,
            stats.n_evals.separate_with_commas()
        );

        Ok(StrategyResult::new(self.problem, state, stats, None))
    }
}
