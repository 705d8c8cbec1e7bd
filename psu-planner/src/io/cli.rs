use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use psu_search::strategy::StrategyKind;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub problem_file: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub order_file: PathBuf,
    #[arg(short, long, value_enum, default_value = "hill-climbing")]
    pub strategy: StrategyArg,
    /// Restarts or beam width, overrides the config file
    #[arg(short, long, value_name = "N")]
    pub n_states: Option<String>,
    /// JSON solution, or CSV table when comparing
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    HillClimbing,
    FirstChoice,
    SimulatedAnnealing,
    RandomRestart,
    LocalBeam,
    /// Runs the whole comparison battery
    Compare,
}

impl StrategyArg {
    /// The single strategy to run, `None` for [`StrategyArg::Compare`].
    pub fn kind(&self) -> Option<StrategyKind> {
        match self {
            StrategyArg::HillClimbing => Some(StrategyKind::HillClimbing),
            StrategyArg::FirstChoice => Some(StrategyKind::FirstChoiceHillClimbing),
            StrategyArg::SimulatedAnnealing => Some(StrategyKind::SimulatedAnnealing),
            StrategyArg::RandomRestart => Some(StrategyKind::RandomRestartHillClimbing),
            StrategyArg::LocalBeam => Some(StrategyKind::LocalBeamSearch),
            StrategyArg::Compare => None,
        }
    }
}
