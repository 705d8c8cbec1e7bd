use std::time::Instant;

use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::SearchError;
use crate::entities::{Problem, State};
use crate::eval::{Cost, cost};
use crate::neighborhood::neighbors_iter;
use crate::strategy::{NStates, SearchStats, Strategy, StrategyKind, StrategyResult};
use crate::util::assertions;

/// Advances `beam_width` states in lockstep.
///
/// Every round, the neighbors of all beam states that are cheaper than the cheapest beam state
/// compete with the current beam for the `beam_width` places of the next beam.
/// The search stops as soon as a round fails to lower the summed cost of the beam.
pub struct LocalBeamSearch<'a> {
    pub problem: &'a Problem,
    pub beam_width: NStates,
    pub rng: SmallRng,
    start: Option<Vec<State>>,
}

impl<'a> LocalBeamSearch<'a> {
    pub fn new(problem: &'a Problem, beam_width: NStates, rng: SmallRng) -> Self {
        Self {
            problem,
            beam_width,
            rng,
            start: None,
        }
    }

    /// Starts the next search from `beam` instead of `beam_width` random initial states.
    /// An empty `beam` is ignored.
    pub fn with_start(mut self, beam: Vec<State>) -> Self {
        self.start = Some(beam).filter(|b| !b.is_empty());
        self
    }

    /// Runs rounds until the summed beam cost stops dropping and returns the final beam, in beam order.
    pub fn search(&mut self) -> Result<(Vec<(State, Cost)>, SearchStats), SearchError> {
        let problem = self.problem;
        let start = match self.start.take() {
            Some(start) => start,
            None => (0..self.beam_width.value())
                .map(|_| problem.initial_state(&mut self.rng))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut beam = start
            .into_iter()
            .map(|state| {
                let state_cost = problem.cost(&state);
                (state, state_cost)
            })
            .collect::<Vec<_>>();

        let mut current_sum = beam_cost(&beam);
        let mut min_cost = beam.iter().map(|(_, c)| *c).min().unwrap_or_default();
        let mut stats = SearchStats {
            n_evals: beam.len(),
            trajectory: vec![current_sum],
            ..SearchStats::default()
        };

        loop {
            stats.n_steps += 1;
            let candidate = self.next_beam(&beam, min_cost, &mut stats);
            let candidate_sum = beam_cost(&candidate);

            if candidate_sum >= current_sum {
                //no improvement, keep the previous beam
                break;
            }
            debug!(
                "[LBS] round {}: beam cost {current_sum} -> {candidate_sum}",
                stats.n_steps
            );
            min_cost = candidate[0].1;
            beam = candidate;
            current_sum = candidate_sum;
            stats.n_moves += 1;
            stats.trajectory.push(current_sum);
        }

        Ok((beam, stats))
    }

    fn next_beam(
        &self,
        beam: &[(State, Cost)],
        min_cost: Cost,
        stats: &mut SearchStats,
    ) -> Vec<(State, Cost)> {
        let Problem {
            inventory, order, ..
        } = self.problem;

        let mut kept = vec![];
        for (state, _) in beam {
            for neighbor in neighbors_iter(state, inventory) {
                stats.n_evals += 1;
                let neighbor_cost = cost(&neighbor, inventory, order);
                if neighbor_cost < min_cost {
                    kept.push((neighbor, neighbor_cost));
                }
            }
        }

        rank_candidates(kept, beam, self.beam_width.value())
    }
}

impl Strategy for LocalBeamSearch<'_> {
    fn name(&self) -> &'static str {
        StrategyKind::LocalBeamSearch.name()
    }

    fn run(&mut self) -> Result<StrategyResult, SearchError> {
        let start_time = Instant::now();
        let (beam, stats) = self.search()?;

        let (state, best_cost) = beam
            .into_iter()
            .min_by_key(|(_, c)| *c)
            .expect("beam holds at least one state");

        info!(
            "[LBS] finished {} rounds in {:.3}ms: cost {best_cost} ({} evaluations)",
            stats.n_steps,
            start_time.elapsed().as_secs_f64() * 1000.0,
            stats.n_evals.separate_with_commas()
        );

        Ok(StrategyResult::new(
            self.problem,
            state,
            stats,
            Some(self.beam_width.annotation()),
        ))
    }
}

/// The `width` cheapest of `kept` followed by `beam`.
/// The sort is stable, so on equal cost kept neighbors rank ahead of the current beam.
fn rank_candidates(
    mut kept: Vec<(State, Cost)>,
    beam: &[(State, Cost)],
    width: usize,
) -> Vec<(State, Cost)> {
    kept.extend(beam.iter().cloned());
    kept.sort_by_key(|(_, c)| *c);
    kept.truncate(width);

    debug_assert!(assertions::beam_is_sorted(&kept));
    kept
}

fn beam_cost(beam: &[(State, Cost)]) -> Cost {
    beam.iter().map(|(_, c)| *c).sum()
}
