use std::collections::HashSet;

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::entities::{FilteredInventory, ItemCatalog, ItemId, NO_PSU, PsuId};
use crate::eval::{covered_items, n_active_slots};

const PROVIDED_ITEMS_PREFIX: &str = "Provided Items: ";
const PSU_COUNT_PREFIX: &str = "Number of PSUs required: ";

/// Human-readable summary of a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `"Provided Items: {covered}/{total}"`
    pub provided_items: String,
    /// `"Number of PSUs required: {active slots}"`
    pub psu_count: String,
    /// One `"{psu}: {item}, {item}, ..."` line per non-sentinel slot
    pub detail: String,
}

/// Formats `state` for output.
///
/// `covered` counts the distinct order items held by the state's PSUs, `total` is the length of the order.
/// In the detail lines, items belonging to the order are written in upper case.
pub fn format_report(
    state: &[PsuId],
    catalog: &ItemCatalog,
    inventory: &FilteredInventory,
    order: &[ItemId],
) -> Report {
    let ordered: HashSet<ItemId> = order.iter().copied().collect();
    let n_covered = covered_items(state, inventory)
        .intersection(&ordered)
        .count();

    let item_name = |item: ItemId| -> String {
        let name = catalog
            .decode(item)
            .map_or_else(|| format!("#{item}"), str::to_string);
        match ordered.contains(&item) {
            true => name.to_uppercase(),
            false => name,
        }
    };

    let detail = state
        .iter()
        .filter(|psu| **psu != NO_PSU)
        .map(|psu| {
            let items = inventory.items(*psu).iter().map(|i| item_name(*i)).join(", ");
            format!("{psu}: {items}\n")
        })
        .collect::<String>();

    Report {
        provided_items: format!("{PROVIDED_ITEMS_PREFIX}{n_covered}/{}", order.len()),
        psu_count: format!("{PSU_COUNT_PREFIX}{}", n_active_slots(state)),
        detail,
    }
}

/// Recovers `(covered, total)` from a `"Provided Items: {covered}/{total}"` text.
pub fn parse_provided_items(text: &str) -> Result<(usize, usize)> {
    let (covered, total) = text
        .trim()
        .strip_prefix(PROVIDED_ITEMS_PREFIX)
        .and_then(|fraction| fraction.split_once('/'))
        .with_context(|| format!("not a provided items text: {text:?}"))?;

    let covered = covered
        .trim()
        .parse()
        .with_context(|| format!("invalid number of provided items in {text:?}"))?;
    let total = total
        .trim()
        .parse()
        .with_context(|| format!("invalid number of ordered items in {text:?}"))?;
    Ok((covered, total))
}

/// Recovers the PSU count from a `"Number of PSUs required: {n}"` text.
pub fn parse_psu_count(text: &str) -> Result<usize> {
    text.trim()
        .strip_prefix(PSU_COUNT_PREFIX)
        .with_context(|| format!("not a PSU count text: {text:?}"))?
        .trim()
        .parse()
        .with_context(|| format!("invalid PSU count in {text:?}"))
}
