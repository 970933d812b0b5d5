use std::fmt;

use crate::record::{FieldLocator, RecordType};

use super::Resolver;

/// Resolves columns with a caller-supplied function. The function is given
/// only the column name and is trusted to return locators for the record
/// type being scanned; the binding rejects locators of any other type.
pub struct FuncResolver<F> {
    func: F,
}

impl<F> FuncResolver<F>
where
    F: Fn(&str) -> Option<FieldLocator>,
{
    pub fn new(func: F) -> Self {
        FuncResolver { func }
    }
}

impl<F> Resolver for FuncResolver<F>
where
    F: Fn(&str) -> Option<FieldLocator>,
{
    fn resolve(&self, _record_type: &RecordType, column: &str) -> Option<FieldLocator> {
        (self.func)(column)
    }
}

impl<F> fmt::Debug for FuncResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FuncResolver")
    }
}
