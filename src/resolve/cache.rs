use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use crate::record::{FieldLocator, RecordType};

use super::Resolver;

/// Memoized resolutions, keyed by record type and column name.
/// Misses are cached as well, so a skipped column is resolved only once.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<TypeId, HashMap<String, Option<FieldLocator>>>,
    hits: u64,
    misses: u64,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve<R>(&mut self, resolver: &R, record_type: &RecordType, column: &str) -> Option<FieldLocator>
    where
        R: Resolver + ?Sized,
    {
        let columns = self.entries.entry(record_type.id()).or_default();
        if let Some(locator) = columns.get(column) {
            self.hits += 1;
            return *locator;
        }

        self.misses += 1;
        let locator = resolver.resolve(record_type, column);
        debug!(
            record = record_type.name(),
            column,
            field = locator.and_then(|l| record_type.desc(l)).map(|f| f.name()),
            "resolved column"
        );
        columns.insert(column.to_string(), locator);
        locator
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
