use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::ItemId;

/// Bidirectional mapping between item names and their numeric ids.
/// Ids are assigned by position in the inventory header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    names: Vec<String>,
    ids: HashMap<String, ItemId>,
}

impl ItemCatalog {
    /// Creates a catalog where the n-th name gets id `n`.
    /// A repeated name keeps both ids for decoding but encodes to its last position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { names, ids }
    }

    pub fn encode(&self, name: &str) -> Option<ItemId> {
        self.ids.get(name).copied()
    }

    pub fn decode(&self, id: ItemId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
