use std::time::Instant;

use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::SearchError;
use crate::entities::Problem;
use crate::strategy::{
    Climb, NStates, SearchStats, Strategy, StrategyKind, StrategyResult, climb,
};

/// Independent hill climbing descents from `n_states` random initial states, keeping the cheapest outcome.
pub struct RandomRestartHillClimbing<'a> {
    pub problem: &'a Problem,
    pub n_states: NStates,
    pub rng: SmallRng,
}

impl<'a> RandomRestartHillClimbing<'a> {
    pub fn new(problem: &'a Problem, n_states: NStates, rng: SmallRng) -> Self {
        Self {
            problem,
            n_states,
            rng,
        }
    }

    fn descend(&mut self) -> Result<Climb, SearchError> {
        let start = self.problem.initial_state(&mut self.rng)?;
        Ok(climb(self.problem, start))
    }
}

impl Strategy for RandomRestartHillClimbing<'_> {
    fn name(&self) -> &'static str {
        StrategyKind::RandomRestartHillClimbing.name()
    }

    fn run(&mut self) -> Result<StrategyResult, SearchError> {
        let start_time = Instant::now();
        let mut stats = SearchStats::default();

        //ties are resolved in favor of the earliest descent
        let mut best = self.descend()?;
        stats.absorb(&best.stats);
        stats.trajectory.push(best.cost);

        for restart in 1..self.n_states.value() {
            let candidate = self.descend()?;
            stats.absorb(&candidate.stats);
            debug!("[RRHC] descent {restart} ended at cost {}", candidate.cost);
            if candidate.cost < best.cost {
                best = candidate;
            }
            stats.trajectory.push(best.cost);
        }

        info!(
            "[RRHC] finished {} descents in {:.3}ms: cost {} ({} evaluations)",
            stats.n_descents,
            start_time.elapsed().as_secs_f64() * 1000.0,
            best.cost,
            stats.n_evals.separate_with_commas()
        );

        Ok(StrategyResult::new(
            self.problem,
            best.state,
            stats,
            Some(self.n_states.annotation()),
        ))
    }
}
