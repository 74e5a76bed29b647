//! String-keyed map that iterates in insertion order.

use std::collections::HashMap;

/// Map from string keys to values whose iteration order is the order in
/// which keys were first inserted.
///
/// Grouping relies on this contract: the aggregator emits rows in
/// first-seen order of their group keys, with no sorting of its own.
#[derive(Debug, Clone)]
pub(crate) struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the value for `key`, inserting `make()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = if let Some(&slot) = self.index.get(key) {
            slot
        } else {
            let slot = self.entries.len();
            self.entries.push((key.to_string(), make()));
            self.index.insert(key.to_string(), slot);
            slot
        };
        &mut self.entries[slot].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
