//! Thread-safe table from qualified names to element descriptors

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::descriptor::ElementDescriptor;
use crate::key::QualifiedKey;

/// Registry of element types keyed by qualified name
///
/// Every operation takes `&self`; share it across threads behind an `Arc`.
/// Registration overwrites unconditionally so applications can replace
/// built-in element types.
#[derive(Debug, Default)]
pub struct Registry {
    table: RwLock<HashMap<QualifiedKey, ElementDescriptor>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`, returning the replaced descriptor
    pub fn register(
        &self,
        key: QualifiedKey,
        descriptor: ElementDescriptor,
    ) -> Option<ElementDescriptor> {
        let type_name = descriptor.type_name();
        let previous = self.table.write().insert(key.clone(), descriptor);
        if let Some(prev) = &previous {
            debug!(
                key = %key,
                previous = prev.type_name(),
                replacement = type_name,
                "element registration overwritten"
            );
        }
        previous
    }

    /// Insert a batch of entries under a single write lock
    ///
    /// Readers observe either none or all of the batch. Later entries in the
    /// batch overwrite earlier ones with the same key.
    pub fn register_all<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (QualifiedKey, ElementDescriptor)>,
    {
        let mut table = self.table.write();
        let mut count = 0;
        for (key, descriptor) in entries {
            if let Some(prev) = table.insert(key.clone(), descriptor) {
                debug!(key = %key, previous = prev.type_name(), "element registration overwritten");
            }
            count += 1;
        }
        count
    }

    /// Current descriptor for `key`
    pub fn lookup(&self, key: &QualifiedKey) -> Option<ElementDescriptor> {
        self.table.read().get(key).cloned()
    }

    pub fn contains(&self, key: &QualifiedKey) -> bool {
        self.table.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// Sorted snapshot of `(key, type name)` pairs
    pub fn entries(&self) -> Vec<(QualifiedKey, &'static str)> {
        let mut entries: Vec<_> = self
            .table
            .read()
            .iter()
            .map(|(k, d)| (k.clone(), d.type_name()))
            .collect();
        entries.sort();
        entries
    }

    /// One `{namespace}local -> Type` line per entry, sorted by key
    pub fn render_table(&self) -> String {
        self.entries()
            .iter()
            .map(|(key, type_name)| format!("{} -> {}", key, type_name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
