use std::fmt::{Display, Formatter};

/// Conditions under which a search cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The order needs more distinct PSUs than the filtered inventory holds,
    /// so no initial state with one distinct PSU per slot can be drawn.
    InsufficientInventory { required: usize, available: usize },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientInventory {
                required,
                available,
            } => write!(
                f,
                "insufficient inventory: order needs {required} distinct PSUs, only {available} available"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
