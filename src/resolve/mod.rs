//! Column-to-field resolution.
//!
//! Every strategy implements [`Resolver`]: given the record type being
//! scanned into and a column name, return the locator of the field that
//! receives the column, or `None` to skip the column.

pub mod cache;
pub mod func_resolver;
pub mod map_resolver;
pub mod name_resolver;
pub mod tag_resolver;

pub use cache::ResolutionCache;
pub use func_resolver::FuncResolver;
pub use map_resolver::MapResolver;
pub use name_resolver::NameResolver;
pub use tag_resolver::TagResolver;

use crate::record::{FieldLocator, RecordType};

pub trait Resolver {
    fn resolve(&self, record_type: &RecordType, column: &str) -> Option<FieldLocator>;
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, record_type: &RecordType, column: &str) -> Option<FieldLocator> {
        (**self).resolve(record_type, column)
    }
}
