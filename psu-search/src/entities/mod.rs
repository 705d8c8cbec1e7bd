mod catalog;
mod inventory;
mod problem;

#[doc(inline)]
pub use catalog::ItemCatalog;
#[doc(inline)]
pub use inventory::FilteredInventory;
#[doc(inline)]
pub use inventory::Inventory;
#[doc(inline)]
pub use inventory::filter;
#[doc(inline)]
pub use problem::Problem;

/// Identifier of a physical storage unit.
pub type PsuId = usize;

/// Numeric encoding of an item name, see [`ItemCatalog`].
pub type ItemId = usize;

/// PSU id reserved as "no unit assigned". Always present in a [`FilteredInventory`], holding no items.
pub const NO_PSU: PsuId = 0;

/// One PSU (or [`NO_PSU`]) per order item. `state.len() == order.len()`, ids may repeat.
pub type State = Vec<PsuId>;
