use std::collections::HashSet;

use crate::entities::{FilteredInventory, Inventory, ItemId, NO_PSU, PsuId, State};
use crate::eval::Cost;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn filtered_inventory_is_valid(
    filtered: &FilteredInventory,
    inventory: &Inventory,
    order: &[ItemId],
) -> bool {
    let ordered: HashSet<ItemId> = order.iter().copied().collect();

    let sentinel_ok = filtered.contains(NO_PSU) && filtered.items(NO_PSU).is_empty();
    let keys_sorted = filtered.keys().windows(2).all(|w| w[0] < w[1]);
    let psus_ok = filtered
        .keys()
        .iter()
        .filter(|psu| **psu != NO_PSU)
        .all(|psu| {
            inventory.contains(*psu)
                && filtered.items(*psu) == inventory.items(*psu)
                && filtered.items(*psu).iter().any(|i| ordered.contains(i))
        });

    sentinel_ok && keys_sorted && psus_ok
}

pub fn state_is_valid(state: &[PsuId], filtered: &FilteredInventory, order: &[ItemId]) -> bool {
    state.len() == order.len() && state.iter().all(|psu| filtered.contains(*psu))
}

pub fn beam_is_sorted(beam: &[(State, Cost)]) -> bool {
    beam.windows(2).all(|w| w[0].1 <= w[1].1)
}
