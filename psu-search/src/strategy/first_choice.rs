use std::time::Instant;

use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::SearchError;
use crate::entities::{Problem, State};
use crate::eval::cost;
use crate::neighborhood::neighbors_iter;
use crate::strategy::{Climb, SearchStats, Strategy, StrategyKind, StrategyResult};
use crate::util::assertions;

/// First-improvement descent from `start`: scans the neighbors in enumeration order,
/// moves to the first one strictly cheaper than the current state and rescans from there.
/// Stops once a complete scan finds no improvement.
pub fn first_choice_climb(problem: &Problem, start: State) -> Climb {
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
        let mut improvement = None;
        for neighbor in neighbors_iter(&state, inventory) {
            stats.n_evals += 1;
            let neighbor_cost = cost(&neighbor, inventory, order);
            if neighbor_cost < current {
                improvement = Some((neighbor, neighbor_cost));
                break;
            }
        }

        match improvement {
            Some((next, next_cost)) => {
                debug!("[FCHC] move {}: cost {current} -> {next_cost}", stats.n_moves);
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

/// Hill climbing accepting the first improving neighbor instead of the best one.
/// May settle in a different local optimum than [`HillClimbing`](crate::strategy::HillClimbing) from the same start.
pub struct FirstChoiceHillClimbing<'a> {
    pub problem: &'a Problem,
    pub rng: SmallRng,
}

impl<'a> FirstChoiceHillClimbing<'a> {
    pub fn new(problem: &'a Problem, rng: SmallRng) -> Self {
        Self { problem, rng }
    }
}

impl Strategy for FirstChoiceHillClimbing<'_> {
    fn name(&self) -> &'static str {
        StrategyKind::FirstChoiceHillClimbing.name()
    }

    fn run(&mut self) -> Result<StrategyResult, SearchError> {
        let start_time = Instant::now();
        let start = self.problem.initial_state(&mut self.rng)?;

        let Climb { state, cost, stats } = first_choice_climb(self.problem, start);

        info!(
            "[FCHC] finished in {:.3}ms: cost {cost} after {} moves ({} evaluations)",
            start_time.elapsed().as_secs_f64() * 1000.0,
            stats.n_moves,
            stats.n_evals.separate_with_commas()
        );

        Ok(StrategyResult::new(self.problem, state, stats, None))
    }
}
