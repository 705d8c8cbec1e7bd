use psu_search::entities::PsuId;
use psu_search::eval::Cost;
use psu_search::strategy::SearchStats;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;

/// Solution of a single strategy run, as written to disk.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    /// Strategy label, including the annotation of parameterized strategies
    pub strategy: String,
    pub provided_items: String,
    pub psu_count: String,
    pub detail: String,
    /// Distinct PSUs in use, ascending
    pub psus: Vec<PsuId>,
    pub cost: Cost,
    /// Ordered item names absent from the inventory header
    pub missing_items: Vec<String>,
    pub stats: SearchStats,
    pub config: PlannerConfig,
}
