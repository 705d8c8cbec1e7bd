use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::entities::{ItemId, NO_PSU, PsuId};
use crate::util::assertions;

/// Complete warehouse inventory: the items held by every PSU.
/// PSUs are enumerated in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    psus: BTreeMap<PsuId, Vec<ItemId>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the items of a PSU, returning the items previously registered under the same id.
    pub fn insert(&mut self, psu: PsuId, items: Vec<ItemId>) -> Option<Vec<ItemId>> {
        self.psus.insert(psu, items)
    }

    /// Items held by `psu`, empty if the PSU is unknown.
    pub fn items(&self, psu: PsuId) -> &[ItemId] {
        self.psus.get(&psu).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, psu: PsuId) -> bool {
        self.psus.contains_key(&psu)
    }

    pub fn psu_ids(&self) -> impl Iterator<Item = PsuId> + '_ {
        self.psus.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PsuId, &[ItemId])> {
        self.psus.iter().map(|(psu, items)| (*psu, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.psus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.psus.is_empty()
    }
}

impl FromIterator<(PsuId, Vec<ItemId>)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (PsuId, Vec<ItemId>)>>(iter: T) -> Self {
        Self {
            psus: iter.into_iter().collect(),
        }
    }
}

/// The PSUs of an [`Inventory`] holding at least one item of a specific order,
/// plus the [`NO_PSU`] sentinel mapped to no items.
///
/// Derived once per order and shared read-only by every search over that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredInventory {
    psus: BTreeMap<PsuId, Vec<ItemId>>,
    /// Cached key order used for neighbor enumeration and sampling, the sentinel comes first
    keys: Vec<PsuId>,
}

impl FilteredInventory {
    /// Keeps only the PSUs whose items intersect `order` and adds the sentinel.
    pub fn filter(inventory: &Inventory, order: &[ItemId]) -> Self {
        let ordered: HashSet<ItemId> = order.iter().copied().collect();
        let is_relevant = |items: &[ItemId]| items.iter().any(|item| ordered.contains(item));

        if is_relevant(inventory.items(NO_PSU)) {
            warn!(
                "PSU {NO_PSU} holds ordered items but doubles as the 'no unit' sentinel, its items are ignored"
            );
        }

        let mut psus: BTreeMap<PsuId, Vec<ItemId>> = inventory
            .iter()
            .filter(|&(psu, items)| psu != NO_PSU && is_relevant(items))
            .map(|(psu, items)| (psu, items.to_vec()))
            .collect();
        psus.insert(NO_PSU, vec![]);

        let keys = psus.keys().copied().collect_vec();
        let filtered = Self { psus, keys };

        debug_assert!(assertions::filtered_inventory_is_valid(
            &filtered, inventory, order
        ));

        filtered
    }

    /// All PSU ids in enumeration order, sentinel included.
    pub fn keys(&self) -> &[PsuId] {
        &self.keys
    }

    /// Items held by `psu`, empty for the sentinel or an unknown id.
    pub fn items(&self, psu: PsuId) -> &[ItemId] {
        self.psus.get(&psu).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, psu: PsuId) -> bool {
        self.psus.contains_key(&psu)
    }

    /// Number of PSUs, sentinel included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Never true, the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of real PSUs (sentinel excluded).
    pub fn n_relevant_psus(&self) -> usize {
        self.keys.len() - 1
    }

    /// Converts back into a plain [`Inventory`], e.g. to filter again.
    pub fn to_inventory(&self) -> Inventory {
        self.psus
            .iter()
            .map(|(psu, items)| (*psu, items.clone()))
            .collect()
    }
}

/// Derives the [`FilteredInventory`] of `inventory` for `order`.
pub fn filter(inventory: &Inventory, order: &[ItemId]) -> FilteredInventory {
    FilteredInventory::filter(inventory, order)
}
