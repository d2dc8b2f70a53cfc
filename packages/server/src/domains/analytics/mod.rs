// Aggregation routines over collected records.
//
// Everything here is pure: fetch happens in the models or the fixture set,
// and these functions fold the record sets into the summary structures the
// dashboard renders. Grouping preserves first-seen insertion order so that
// descending sorts break ties deterministically.

pub mod dashboard;
pub mod doc;
pub mod keywords;
pub mod matrix;
pub mod network;
pub mod timeline;
pub mod topics;
pub mod trending;
pub mod unified;
pub mod urgency;

pub use doc::DocSummary;

use std::collections::HashMap;

/// Grouping map that remembers the order keys were first seen.
pub(crate) struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedGroups<V> {
    pub fn new() -> Self {
        OrderedGroups {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Accumulator for `key`, created on first sight.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let position = *self.index.entry(key.to_string()).or_insert_with(|| {
            self.entries.push((key.to_string(), V::default()));
            self.entries.len() - 1
        });
        &mut self.entries[position].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<(String, V)> {
        self.entries
    }
}
