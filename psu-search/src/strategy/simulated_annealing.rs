use std::time::Instant;

use log::{debug, info};
use rand::Rng;
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::SearchError;
use crate::entities::{Problem, State};
use crate::neighborhood::random_perturbation;
use crate::strategy::{Climb, SearchStats, Strategy, StrategyKind, StrategyResult, climb};
use crate::util::assertions;

/// Starting temperature. It drops by one per step, so this is also the number of annealing steps.
pub const INITIAL_TEMPERATURE: u32 = 10_000;

/// Random single-slot perturbations under an integer countdown temperature,
/// followed by one hill climbing descent from wherever the walk ended.
///
/// A perturbation with `delta = cost(candidate) - cost(current)` is always accepted when `delta > 0`,
/// otherwise with probability `exp(delta / temperature)`.
pub struct SimulatedAnnealing<'a> {
    pub problem: &'a Problem,
    pub rng: SmallRng,
    pub initial_temperature: u32,
}

impl<'a> SimulatedAnnealing<'a> {
    pub fn new(problem: &'a Problem, rng: SmallRng) -> Self {
        Self {
            problem,
            rng,
            initial_temperature: INITIAL_TEMPERATURE,
        }
    }

    /// Performs exactly `initial_temperature` perturbation steps from `start`
    /// and returns the state the walk ended in.
    pub fn anneal(&mut self, start: State) -> (State, SearchStats) {
        let Problem {
            inventory, order, ..
        } = self.problem;
        debug_assert!(assertions::state_is_valid(&start, inventory, order));

        let mut state = start;
        let mut current = self.problem.cost(&state);
        let mut stats = SearchStats {
            n_evals: 1,
            trajectory: vec![current],
            ..SearchStats::default()
        };

        let mut temperature = self.initial_temperature;
        while temperature > 0 {
            let candidate = random_perturbation(&state, inventory, &mut self.rng);
            let candidate_cost = self.problem.cost(&candidate);
            stats.n_evals += 1;

            let delta = candidate_cost as f64 - current as f64;
            let accept =
                delta > 0.0 || self.rng.random::<f64>() < (delta / temperature as f64).exp();

            if accept {
                state = candidate;
                current = candidate_cost;
                stats.n_moves += 1;
                stats.trajectory.push(current);
            }

            temperature -= 1;
            stats.n_steps += 1;
        }

        debug!(
            "[SA] walk ended at cost {current} after {} steps, {} accepted",
            stats.n_steps.separate_with_commas(),
            stats.n_moves.separate_with_commas()
        );

        (state, stats)
    }
}

impl Strategy for SimulatedAnnealing<'_> {
    fn name(&self) -> &'static str {
        StrategyKind::SimulatedAnnealing.name()
    }

    fn run(&mut self) -> Result<StrategyResult, SearchError> {
        let start_time = Instant::now();
        let start = self.problem.initial_state(&mut self.rng)?;

        let (walk_end, mut stats) = self.anneal(start);
        let Climb {
            state,
            cost,
            stats: polish_stats,
        } = climb(self.problem, walk_end);
        stats.absorb(&polish_stats);

        info!(
            "[SA] finished in {:.3}ms: cost {cost} after polishing ({} evaluations)",
            start_time.elapsed().as_secs_f64() * 1000.0,
            stats.n_evals.separate_with_commas()
        );

        Ok(StrategyResult::new(self.problem, state, stats, None))
    }
}
