use crate::record::{FieldLocator, RecordType};

use super::Resolver;

/// Resolves a column to the field labelled with the column name under a
/// tag key. Fields without a label under that key are never matched.
#[derive(Debug, Clone)]
pub struct TagResolver {
    key: String,
}

impl TagResolver {
    pub const DEFAULT_KEY: &'static str = "cql";

    pub fn new(key: impl Into<String>) -> Self {
        TagResolver { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for TagResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl Resolver for TagResolver {
    fn resolve(&self, record_type: &RecordType, column: &str) -> Option<FieldLocator> {
        record_type.field_by_tag(&self.key, column)
    }
}
