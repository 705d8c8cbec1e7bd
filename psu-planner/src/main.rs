use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use psu_planner::config::PlannerConfig;
use psu_planner::io;
use psu_planner::io::cli::Cli;
use psu_planner::planner::Planner;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlannerConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(n_states) = &args.n_states {
        config.n_restarts = n_states.clone();
        config.beam_width = n_states.clone();
    }

    info!("Successfully parsed PlannerConfig: {config:?}");

    let planner = Planner::from_files(&args.problem_file, &args.order_file, config)?;

    match args.strategy.kind() {
        Some(kind) => {
            let output = planner.solve(kind)?;
            if let Some(path) = &args.output_file {
                io::write_json(&output, path)?;
            }
        }
        None => {
            let table = planner.compare()?;
            if let Some(path) = &args.output_file {
                table.write_csv(path)?;
            }
        }
    }

    Ok(())
}
