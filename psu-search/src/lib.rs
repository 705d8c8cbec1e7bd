//! Local search engine assigning physical storage units (PSUs) to warehouse orders.
//!
//! A [`Problem`](entities::Problem) bundles the inventory relevant to one order.
//! Every [`Strategy`](strategy::Strategy) evolves a state (one PSU per order item)
//! by consulting the primitives in [`neighborhood`] and [`eval`], trading off
//! items fulfilled against PSUs used.

/// Inventory, item catalog and problem definitions.
pub mod entities;

/// Cost function and human-readable reports of states.
pub mod eval;

/// Initial states and single-slot neighborhoods.
pub mod neighborhood;

/// The local search strategies.
pub mod strategy;

/// Benchmark harness running a fixed battery of strategies.
pub mod comparator;

/// Set of functions used throughout to assure the correctness of the library.
pub mod util;

mod error;

#[doc(inline)]
pub use error::SearchError;
