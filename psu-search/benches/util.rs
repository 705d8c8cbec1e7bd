use itertools::Itertools;
use log::info;
use psu_search::entities::{Inventory, ItemCatalog, Problem};
use rand::prelude::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

pub const N_ITEMS: usize = 500;
pub const N_PSUS: usize = 2000;
pub const MAX_ITEMS_PER_PSU: usize = 8;

/// Creates a warehouse of `N_PSUS` PSUs holding random items out of `N_ITEMS`,
/// together with an order of `order_len` distinct items.
/// Every item is stocked in at least one PSU.
pub fn create_problem(order_len: usize, seed: u64) -> Problem {
    let mut rng = SmallRng::seed_from_u64(seed);
    let catalog = ItemCatalog::from_names((0..N_ITEMS).map(|i| format!("item_{i}")));

    let inventory: Inventory = (1..=N_PSUS)
        .map(|psu| {
            let n_items = rng.random_range(1..=MAX_ITEMS_PER_PSU);
            let mut items = (0..n_items)
                .map(|_| rng.random_range(0..N_ITEMS))
                .collect_vec();
            if psu <= N_ITEMS {
                items.push(psu - 1);
            }
            (psu, items.into_iter().unique().collect_vec())
        })
        .collect();

    let order = index::sample(&mut rng, N_ITEMS, order_len).into_vec();
    let problem = Problem::new(&inventory, order, catalog);
    info!(
        "created warehouse with {} PSUs, {} relevant to an order of {order_len} items",
        N_PSUS,
        problem.inventory.n_relevant_psus()
    );
    problem
}
