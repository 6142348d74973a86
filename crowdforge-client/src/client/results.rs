//! Result wrappers shared by the resource clients

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::FieldError;

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    #[serde(default)]
    pub items: Vec<T>,
    /// True when the server cut the page at the requested limit.
    #[serde(default)]
    pub has_more: bool,
}

/// Outcome of a write, with the created-vs-updated distinction the API
/// reports through its status code (201 vs 200).
#[derive(Debug, Clone)]
pub struct ModificationResult<T> {
    pub value: T,
    pub newly_created: bool,
}

/// Per-field validation failures for one rejected batch item.
pub type ItemErrors = BTreeMap<String, FieldError>;

/// Partial-success outcome of a batch create, keyed by input index.
///
/// Every submitted index appears in exactly one of the two maps; nothing is
/// silently dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BatchCreateResult<T> {
    #[serde(default = "BTreeMap::new", deserialize_with = "indexed_map")]
    pub items: BTreeMap<usize, T>,
    #[serde(default = "BTreeMap::new", deserialize_with = "indexed_map")]
    pub validation_errors: BTreeMap<usize, ItemErrors>,
}

impl<T> BatchCreateResult<T> {
    /// True when every submitted item was created.
    pub fn is_complete(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

/// The wire format keys these maps with stringified input indices.
fn indexed_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<usize, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = BTreeMap::<String, T>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| {
            key.parse::<usize>()
                .map(|index| (index, value))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}
