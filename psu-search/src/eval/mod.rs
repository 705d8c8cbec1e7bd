mod cost;
mod report;

#[doc(inline)]
pub use cost::Cost;
#[doc(inline)]
pub use cost::MISSING_ITEM_PENALTY;
#[doc(inline)]
pub use cost::cost;
#[doc(inline)]
pub use cost::covered_items;
#[doc(inline)]
pub use cost::n_active_slots;
#[doc(inline)]
pub use cost::n_missing_items;
#[doc(inline)]
pub use report::Report;
#[doc(inline)]
pub use report::format_report;
#[doc(inline)]
pub use report::parse_provided_items;
#[doc(inline)]
pub use report::parse_psu_count;
