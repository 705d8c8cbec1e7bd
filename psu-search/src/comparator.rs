use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};
use thousands::Separable;

use crate::entities::Problem;
use crate::eval::{parse_provided_items, parse_psu_count};
use crate::strategy::{NStates, StrategyKind};

/// Number of initial states every parameterized strategy is benchmarked with.
pub const N_STATES_BATTERY: [usize; 4] = [25, 50, 75, 100];

const CSV_HEADER: [&str; 3] = [
    "items provided [%]",
    "number of PSUs required",
    "duration [sec.]",
];

/// One benchmarked strategy instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Strategy name, followed by its annotation if parameterized
    pub label: String,
    pub items_provided_pct: f64,
    pub n_psus: usize,
    pub duration_secs: f64,
}

/// Results of [`Comparator::compare_all`], in battery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn get(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the table as comma separated values to `path`, overwriting any existing file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("could not create comparison file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_delimited(&mut writer, ',')
            .with_context(|| format!("could not write comparison file: {}", path.display()))?;
        info!("[CMP] comparison written to {}", path.display());
        Ok(())
    }

    /// Header row with an empty leading cell, then one row per strategy.
    /// Durations are rounded to 4 decimals.
    pub fn write_delimited(&self, writer: &mut impl Write, delimiter: char) -> Result<()> {
        writeln!(writer, "{delimiter}{}", CSV_HEADER.join(&delimiter.to_string()))?;
        for row in &self.rows {
            writeln!(
                writer,
                "{}{delimiter}{}{delimiter}{}{delimiter}{}",
                row.label,
                row.items_provided_pct,
                row.n_psus,
                round_to(row.duration_secs, 4)
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Runs a fixed battery of strategies over one [`Problem`] and tabulates their outcomes.
pub struct Comparator<'a> {
    pub problem: &'a Problem,
    /// Every strategy instance gets a PRNG seeded with this value, entropy if undefined
    pub prng_seed: Option<u64>,
}

impl<'a> Comparator<'a> {
    pub fn new(problem: &'a Problem, prng_seed: Option<u64>) -> Self {
        Self { problem, prng_seed }
    }

    /// The benchmarked instances: every unparameterized strategy once,
    /// the parameterized ones once per entry of [`N_STATES_BATTERY`].
    pub fn battery() -> Vec<(StrategyKind, NStates)> {
        StrategyKind::ALL
            .iter()
            .flat_map(|kind| match kind.is_parameterized() {
                true => N_STATES_BATTERY
                    .iter()
                    .map(|n| (*kind, NStates::new(*n)))
                    .collect::<Vec<_>>(),
                false => vec![(*kind, NStates::default())],
            })
            .collect()
    }

    fn rng(&self) -> SmallRng {
        match self.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    pub fn compare_all(&self) -> Result<ComparisonTable> {
        let mut table = ComparisonTable::default();

        for (kind, n_states) in Self::battery() {
            let mut strategy = kind.build(self.problem, n_states, self.rng());

            let start = Instant::now();
            let result = strategy
                .run()
                .with_context(|| format!("{kind} failed to run"))?;
            let duration_secs = start.elapsed().as_secs_f64();

            let label = result.label(strategy.name());
            let (covered, total) = parse_provided_items(&result.report.provided_items)?;
            let n_psus = parse_psu_count(&result.report.psu_count)?;
            let items_provided_pct = match total {
                0 => 100.0,
                _ => covered as f64 / total as f64 * 100.0,
            };

            info!(
                "[CMP] {label}: {items_provided_pct:.1}% provided with {n_psus} PSUs in {duration_secs:.4}s"
            );
            debug!(
                "[CMP] {label}: {} steps, {} moves, {} evaluations, {} descents",
                result.stats.n_steps.separate_with_commas(),
                result.stats.n_moves.separate_with_commas(),
                result.stats.n_evals.separate_with_commas(),
                result.stats.n_descents
            );

            table.rows.push(ComparisonRow {
                label,
                items_provided_pct,
                n_psus,
                duration_secs,
            });
        }

        Ok(table)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
