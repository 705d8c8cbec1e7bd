#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use log::LevelFilter;
    use test_case::test_case;

    use psu_planner::config::PlannerConfig;
    use psu_planner::io;
    use psu_planner::io::output::PlanOutput;
    use psu_planner::io::parser::read_problem_file;
    use psu_planner::planner::Planner;
    use psu_search::SearchError;
    use psu_search::entities::NO_PSU;
    use psu_search::strategy::{NStates, StrategyKind};

    const PROBLEM_PATH: &str = "../assets/problem_warehouse.txt";
    const CONFIG_PATH: &str = "../assets/config.json";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Info)
            .try_init();
    }

    fn planner(order_path: &str) -> Planner {
        init_logger();
        Planner::from_files(
            Path::new(PROBLEM_PATH),
            Path::new(order_path),
            PlannerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn problem_file_layout() {
        let problem_file = read_problem_file(Path::new(PROBLEM_PATH)).unwrap();
        assert_eq!(problem_file.catalog.len(), 21);
        assert_eq!(problem_file.inventory.len(), 15);

        let fig = problem_file.catalog.encode("fig").unwrap();
        let apple = problem_file.catalog.encode("apple").unwrap();
        let cherry = problem_file.catalog.encode("cherry").unwrap();
        assert_eq!(problem_file.inventory.items(8), &[apple, cherry, fig]);
    }

    #[test_case(StrategyKind::HillClimbing; "hill climbing")]
    #[test_case(StrategyKind::FirstChoiceHillClimbing; "first choice")]
    #[test_case(StrategyKind::SimulatedAnnealing; "simulated annealing")]
    #[test_case(StrategyKind::RandomRestartHillClimbing; "random restart")]
    #[test_case(StrategyKind::LocalBeamSearch; "local beam")]
    fn small_order_fits_one_psu(kind: StrategyKind) {
        let planner = planner("../assets/order_small.txt");
        // PSU 0 holds apple but doubles as the sentinel
        assert!(planner.problem.inventory.items(NO_PSU).is_empty());

        let output = planner.solve(kind).unwrap();
        assert_eq!(output.provided_items, "Provided Items: 3/3");
        assert_eq!(output.psu_count, "Number of PSUs required: 1");
        assert_eq!(output.detail, "8: APPLE, CHERRY, FIG\n");
        assert_eq!(output.psus, vec![8]);
        assert_eq!(output.cost, 1);
        assert!(output.missing_items.is_empty());
    }

    #[test_case(StrategyKind::HillClimbing; "hill climbing")]
    #[test_case(StrategyKind::RandomRestartHillClimbing; "random restart")]
    #[test_case(StrategyKind::LocalBeamSearch; "local beam")]
    fn missing_items_are_reported(kind: StrategyKind) {
        let planner = planner("../assets/order_missing.txt");
        assert_eq!(planner.missing_items, vec!["dragonfruit".to_string()]);
        assert_eq!(planner.problem.order.len(), 2);

        let output = planner.solve(kind).unwrap();
        assert_eq!(output.provided_items, "Provided Items: 1/2");
        assert_eq!(output.psu_count, "Number of PSUs required: 1");
        assert_eq!(output.cost, 11);
        assert!(output.psus == vec![3] || output.psus == vec![12]);
        assert_eq!(output.missing_items, vec!["dragonfruit".to_string()]);
    }

    #[test]
    fn insufficient_inventory_surfaces() {
        let planner = planner("../assets/order_insufficient.txt");
        let err = planner.solve(StrategyKind::HillClimbing).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::InsufficientInventory {
                required: 5,
                available: 3
            })
        );
    }

    #[test_case(StrategyKind::HillClimbing; "hill climbing")]
    #[test_case(StrategyKind::FirstChoiceHillClimbing; "first choice")]
    #[test_case(StrategyKind::SimulatedAnnealing; "simulated annealing")]
    #[test_case(StrategyKind::LocalBeamSearch; "local beam")]
    fn large_order_is_fully_covered(kind: StrategyKind) {
        let planner = planner("../assets/order_large.txt");
        let output = planner.solve(kind).unwrap();
        assert_eq!(output.provided_items, "Provided Items: 6/6");
        assert!((5..=6).contains(&output.psus.len()));
        assert!(output.cost <= 6);
    }

    #[test]
    fn config_file_is_clamped() {
        let config = io::read_config(Path::new(CONFIG_PATH)).unwrap();
        assert_eq!(config.prng_seed, Some(7));
        assert_eq!(config.n_restarts(), NStates::new(25));
        assert_eq!(config.beam_width().value(), 100);
        assert!(config.beam_width().defaulted());

        let planner = Planner::from_files(
            Path::new(PROBLEM_PATH),
            Path::new("../assets/order_small.txt"),
            config,
        )
        .unwrap();
        let output = planner.solve(StrategyKind::LocalBeamSearch).unwrap();
        assert_eq!(
            output.strategy,
            "Local Beam Search (default: 100 initial states)"
        );
    }

    #[test]
    fn solution_round_trips_through_json() {
        let planner = planner("../assets/order_missing.txt");
        let output = planner.solve(StrategyKind::SimulatedAnnealing).unwrap();

        let path = std::env::temp_dir().join(format!("psu_solution_{}.json", std::process::id()));
        io::write_json(&output, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let parsed: PlanOutput = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.strategy, "Simulated Annealing");
        assert_eq!(parsed.cost, output.cost);
        assert_eq!(parsed.config, PlannerConfig::default());
    }

    #[test]
    fn comparison_of_large_order() {
        let planner = planner("../assets/order_large.txt");
        let table = planner.compare().unwrap();
        assert_eq!(table.len(), 11);
        for row in &table.rows {
            assert!(approx_eq!(f64, row.items_provided_pct, 100.0, ulps = 2));
            assert!((5..=6).contains(&row.n_psus));
        }
    }
}
