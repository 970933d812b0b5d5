use std::collections::HashMap;

use crate::record::{FieldLocator, RecordType};

use super::Resolver;

/// Resolves columns through an explicit column name to field name map.
/// Unlisted columns, and entries naming a field the record does not have,
/// are skipped.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    columns: HashMap<String, String>,
}

impl MapResolver {
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MapResolver {
            columns: mapping
                .into_iter()
                .map(|(column, field)| (column.into(), field.into()))
                .collect(),
        }
    }

    pub fn field_for(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

impl Resolver for MapResolver {
    fn resolve(&self, record_type: &RecordType, column: &str) -> Option<FieldLocator> {
        record_type.field(self.field_for(column)?)
    }
}
