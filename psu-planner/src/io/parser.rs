use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use log::{info, warn};
use psu_search::entities::{Inventory, ItemCatalog, ItemId};

/// Contents of a warehouse problem file.
///
/// The first line lists the item names of the warehouse, separated by whitespace, and is followed by a blank line.
/// Every subsequent line describes one PSU: its id is the line's index (starting at 0) among these rows,
/// its items are the names on the line. Blank rows hold no PSU but still consume an id.
#[derive(Clone, Debug)]
pub struct ProblemFile {
    pub catalog: ItemCatalog,
    pub inventory: Inventory,
}

/// Contents of an order file: the first line lists the ordered item names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderFile {
    /// Encoded ordered items, in file order, duplicates kept
    pub order: Vec<ItemId>,
    /// Ordered names that do not appear in the catalog
    pub missing_items: Vec<String>,
}

pub fn parse_problem(text: &str) -> Result<ProblemFile> {
    let mut lines = text.lines();

    let header = lines.next().context("problem file is empty")?;
    let catalog = ItemCatalog::from_names(header.split_whitespace());
    ensure!(!catalog.is_empty(), "problem file lists no items");

    if let Some(separator) = lines.next() {
        ensure!(
            separator.trim().is_empty(),
            "expected a blank line after the item names, found {separator:?}"
        );
    }

    let mut inventory = Inventory::new();
    for (psu, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let items = line
            .split_whitespace()
            .map(|name| {
                catalog
                    .encode(name)
                    .with_context(|| format!("PSU {psu} holds unknown item {name:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        inventory.insert(psu, items);
    }

    Ok(ProblemFile { catalog, inventory })
}

pub fn parse_order(text: &str, catalog: &ItemCatalog) -> OrderFile {
    let mut order = vec![];
    let mut missing_items = vec![];

    let names = text.lines().next().unwrap_or_default().split_whitespace();
    for name in names {
        match catalog.encode(name) {
            Some(item) => order.push(item),
            None => missing_items.push(name.to_string()),
        }
    }

    if !missing_items.is_empty() {
        warn!(
            "[PARSE] ordered items not in the warehouse: {}",
            missing_items.join(", ")
        );
    }

    OrderFile {
        order,
        missing_items,
    }
}

pub fn read_problem_file(path: &Path) -> Result<ProblemFile> {
    warn_on_unexpected_name(path, "problem");
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read problem file: {}", path.display()))?;
    let problem_file = parse_problem(&text)
        .with_context(|| format!("could not parse problem file: {}", path.display()))?;

    info!(
        "[PARSE] {} items in {} PSUs read from {}",
        problem_file.catalog.len(),
        problem_file.inventory.len(),
        path.display()
    );
    Ok(problem_file)
}

pub fn read_order_file(path: &Path, catalog: &ItemCatalog) -> Result<OrderFile> {
    warn_on_unexpected_name(path, "order");
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read order file: {}", path.display()))?;
    let order_file = parse_order(&text, catalog);

    info!(
        "[PARSE] order of {} items read from {}",
        order_file.order.len(),
        path.display()
    );
    Ok(order_file)
}

fn warn_on_unexpected_name(path: &Path, expected: &str) {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    if !file_name.contains(expected) {
        warn!(
            "[PARSE] file name {file_name:?} does not contain {expected:?}, is this the right file?"
        );
    }
}
