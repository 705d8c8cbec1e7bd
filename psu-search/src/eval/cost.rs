use std::collections::HashSet;

use crate::entities::{FilteredInventory, ItemId, NO_PSU, PsuId};

/// Cost of a state, lower is better.
pub type Cost = usize;

/// Weight of a single unfulfilled order item relative to a single PSU in use.
pub const MISSING_ITEM_PENALTY: Cost = 10;

/// Union of the items held by the PSUs referenced in `state`.
pub fn covered_items(state: &[PsuId], inventory: &FilteredInventory) -> HashSet<ItemId> {
    state
        .iter()
        .flat_map(|psu| inventory.items(*psu))
        .copied()
        .collect()
}

/// Order items (every occurrence) not covered by the PSUs of `state`.
pub fn n_missing_items(state: &[PsuId], inventory: &FilteredInventory, order: &[ItemId]) -> usize {
    let covered = covered_items(state, inventory);
    order.iter().filter(|item| !covered.contains(*item)).count()
}

/// Slots holding a real PSU. A PSU referenced by several slots is counted once per slot.
pub fn n_active_slots(state: &[PsuId]) -> usize {
    state.iter().filter(|psu| **psu != NO_PSU).count()
}

/// `10 * missing items + active slots`
pub fn cost(state: &[PsuId], inventory: &FilteredInventory, order: &[ItemId]) -> Cost {
    MISSING_ITEM_PENALTY * n_missing_items(state, inventory, order) + n_active_slots(state)
}
