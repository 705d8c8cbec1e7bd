use rand::Rng;
use rand::seq::index;

use crate::SearchError;
use crate::entities::{FilteredInventory, ItemId, PsuId, State};
use crate::eval::{Cost, cost};

/// Draws `order.len()` distinct PSU ids uniformly at random (without replacement) from the inventory.
///
/// Fails with [`SearchError::InsufficientInventory`] if the inventory holds fewer distinct ids than the order has items.
pub fn initial_state(
    inventory: &FilteredInventory,
    order: &[ItemId],
    rng: &mut impl Rng,
) -> Result<State, SearchError> {
    let keys = inventory.keys();
    if keys.len() < order.len() {
        return Err(SearchError::InsufficientInventory {
            required: order.len(),
            available: keys.len(),
        });
    }
    Ok(index::sample(rng, keys.len(), order.len())
        .into_iter()
        .map(|i| keys[i])
        .collect())
}

/// Lazily enumerates every state differing from `state` in exactly one slot.
/// Slot-major, then inventory key order. Duplicates are not pruned.
pub fn neighbors_iter<'a>(
    state: &'a [PsuId],
    inventory: &'a FilteredInventory,
) -> impl Iterator<Item = State> + 'a {
    (0..state.len()).flat_map(move |slot| {
        inventory
            .keys()
            .iter()
            .filter(move |psu| **psu != state[slot])
            .map(move |psu| {
                let mut neighbor = state.to_vec();
                neighbor[slot] = *psu;
                neighbor
            })
    })
}

/// All neighbors of `state`, see [`neighbors_iter`].
pub fn neighbors(state: &[PsuId], inventory: &FilteredInventory) -> Vec<State> {
    neighbors_iter(state, inventory).collect()
}

/// Number of neighbors [`neighbors_iter`] yields for `state`, assuming its PSUs belong to the inventory.
pub fn n_neighbors(state: &[PsuId], inventory: &FilteredInventory) -> usize {
    state.len() * inventory.n_relevant_psus()
}

/// Returns the cheapest neighbor if it is strictly cheaper than `state`.
/// Ties go to the neighbor enumerated first.
pub fn best_neighbor(
    neighbors: impl IntoIterator<Item = State>,
    inventory: &FilteredInventory,
    order: &[ItemId],
    state: &[PsuId],
) -> Option<State> {
    let current = cost(state, inventory, order);
    best_improvement(neighbors, inventory, order, current).map(|(neighbor, _)| neighbor)
}

/// Cheapest of `neighbors` along with its cost, if strictly cheaper than `current`.
pub(crate) fn best_improvement(
    neighbors: impl IntoIterator<Item = State>,
    inventory: &FilteredInventory,
    order: &[ItemId],
    current: Cost,
) -> Option<(State, Cost)> {
    neighbors
        .into_iter()
        .map(|neighbor| {
            let c = cost(&neighbor, inventory, order);
            (neighbor, c)
        })
        .min_by_key(|(_, c)| *c)
        .filter(|(_, c)| *c < current)
}

/// Copy of `state` with one uniformly chosen slot set to a uniformly chosen inventory key.
/// The key may equal the slot's current value, and an empty state is returned unchanged.
pub fn random_perturbation(
    state: &[PsuId],
    inventory: &FilteredInventory,
    rng: &mut impl Rng,
) -> State {
    let mut candidate = state.to_vec();
    if !candidate.is_empty() {
        let slot = rng.random_range(0..candidate.len());
        let keys = inventory.keys();
        candidate[slot] = keys[rng.random_range(0..keys.len())];
    }
    candidate
}
