use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Three-way split of two keyed collections.
///
/// `entering` and `persisting` follow the order of the next collection,
/// `exiting` the order of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<K> {
    pub entering: Vec<K>,
    pub persisting: Vec<K>,
    pub exiting: Vec<K>,
}

impl<K> Reconciliation<K> {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.entering.is_empty() && self.exiting.is_empty()
    }
}

/// Matches the keys of the next collection against the previous one.
///
/// Keys must be unique within each collection; a duplicate in `next` is
/// rejected because it would make element identity ambiguous.
pub fn reconcile<K>(
    previous: impl IntoIterator<Item = K>,
    next: impl IntoIterator<Item = K>,
) -> ChartResult<Reconciliation<K>>
where
    K: Hash + Eq + Clone + Debug,
{
    let previous: IndexSet<K> = previous.into_iter().collect();
    let mut seen = IndexSet::new();
    let mut entering = Vec::new();
    let mut persisting = Vec::new();

    for key in next {
        if seen.contains(&key) {
            return Err(ChartError::InvalidData(format!(
                "duplicate element key {key:?} in one collection"
            )));
        }
        if previous.contains(&key) {
            persisting.push(key.clone());
        } else {
            entering.push(key.clone());
        }
        seen.insert(key);
    }

    let exiting = previous
        .into_iter()
        .filter(|key| !seen.contains(key))
        .collect();

    Ok(Reconciliation {
        entering,
        persisting,
        exiting,
    })
}
