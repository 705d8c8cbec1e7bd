use log::info;
use rand::Rng;

use crate::SearchError;
use crate::entities::{FilteredInventory, Inventory, ItemCatalog, ItemId, PsuId, State};
use crate::eval::{Cost, Report, cost, format_report};
use crate::neighborhood::initial_state;

/// An order to be covered together with the inventory relevant to it.
///
/// The inventory is filtered once on construction and shared read-only by every strategy
/// searching over this problem.
#[derive(Clone, Debug)]
pub struct Problem {
    pub inventory: FilteredInventory,
    pub order: Vec<ItemId>,
    pub catalog: ItemCatalog,
}

impl Problem {
    pub fn new(inventory: &Inventory, order: Vec<ItemId>, catalog: ItemCatalog) -> Self {
        let filtered = FilteredInventory::filter(inventory, &order);
        info!(
            "[PRB] {} of {} PSUs are relevant to an order of {} items",
            filtered.n_relevant_psus(),
            inventory.len(),
            order.len()
        );
        Self {
            inventory: filtered,
            order,
            catalog,
        }
    }

    pub fn cost(&self, state: &[PsuId]) -> Cost {
        cost(state, &self.inventory, &self.order)
    }

    pub fn report(&self, state: &[PsuId]) -> Report {
        format_report(state, &self.catalog, &self.inventory, &self.order)
    }

    /// Draws a random initial state, see [`initial_state`].
    pub fn initial_state(&self, rng: &mut impl Rng) -> Result<State, SearchError> {
        initial_state(&self.inventory, &self.order, rng)
    }
}
