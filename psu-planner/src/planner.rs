use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use psu_search::comparator::{Comparator, ComparisonTable};
use psu_search::entities::{NO_PSU, Problem};
use psu_search::strategy::{NStates, StrategyKind};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::PlannerConfig;
use crate::io::output::PlanOutput;
use crate::io::parser::{self, OrderFile, ProblemFile};

/// A parsed warehouse and order, ready to be searched with any strategy.
pub struct Planner {
    pub problem: Problem,
    pub missing_items: Vec<String>,
    pub config: PlannerConfig,
}

impl Planner {
    pub fn new(problem_file: ProblemFile, order_file: OrderFile, config: PlannerConfig) -> Self {
        let ProblemFile { catalog, inventory } = problem_file;
        let OrderFile {
            order,
            missing_items,
        } = order_file;
        Self {
            problem: Problem::new(&inventory, order, catalog),
            missing_items,
            config,
        }
    }

    pub fn from_files(
        problem_path: &Path,
        order_path: &Path,
        config: PlannerConfig,
    ) -> Result<Self> {
        let problem_file = parser::read_problem_file(problem_path)?;
        let order_file = parser::read_order_file(order_path, &problem_file.catalog)?;
        Ok(Self::new(problem_file, order_file, config))
    }

    /// Number of initial states `kind` is configured with.
    pub fn n_states(&self, kind: StrategyKind) -> NStates {
        match kind {
            StrategyKind::RandomRestartHillClimbing => self.config.n_restarts(),
            StrategyKind::LocalBeamSearch => self.config.beam_width(),
            _ => NStates::default(),
        }
    }

    fn rng(&self) -> SmallRng {
        match self.config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Runs a single strategy and logs its report.
    pub fn solve(&self, kind: StrategyKind) -> Result<PlanOutput> {
        let n_states = self.n_states(kind);
        if kind.is_parameterized() && n_states.defaulted() {
            warn!(
                "[PLAN] invalid number of initial states for {kind}, using {}",
                n_states.value()
            );
        }

        let mut strategy = kind.build(&self.problem, n_states, self.rng());
        let result = strategy
            .run()
            .with_context(|| format!("{kind} could not start"))?;
        let label = result.label(strategy.name());

        info!("[PLAN] {label}");
        info!("[PLAN] {}", result.report.provided_items);
        info!("[PLAN] {}", result.report.psu_count);
        for line in result.report.detail.lines() {
            info!("[PLAN]   {line}");
        }
        info!(
            "[PLAN] {} cost evaluations, {} moves",
            result.stats.n_evals.separate_with_commas(),
            result.stats.n_moves.separate_with_commas()
        );
        if !self.missing_items.is_empty() {
            info!(
                "[PLAN] not in the warehouse: {}",
                self.missing_items.join(", ")
            );
        }

        let psus = result
            .state
            .iter()
            .copied()
            .filter(|psu| *psu != NO_PSU)
            .sorted()
            .dedup()
            .collect_vec();

        Ok(PlanOutput {
            strategy: label,
            provided_items: result.report.provided_items,
            psu_count: result.report.psu_count,
            detail: result.report.detail,
            psus,
            cost: result.cost,
            missing_items: self.missing_items.clone(),
            stats: result.stats,
            config: self.config.clone(),
        })
    }

    /// Runs the comparison battery over the planner's problem.
    pub fn compare(&self) -> Result<ComparisonTable> {
        Comparator::new(&self.problem, self.config.prng_seed).compare_all()
    }
}
