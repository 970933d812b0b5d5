use crate::record::{FieldLocator, RecordType};

use super::Resolver;

/// Resolves a column to the field whose name is the column name in Rust
/// field case: `Timeline` and `timeline` both go to `timeline`, `userId`
/// goes to `user_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver;

impl NameResolver {
    pub fn new() -> Self {
        NameResolver
    }
}

impl Resolver for NameResolver {
    fn resolve(&self, record_type: &RecordType, column: &str) -> Option<FieldLocator> {
        record_type.field(&field_case(column))
    }
}

/// Converts a column name to snake case. Underscores are kept, an underscore
/// is inserted where a lowercase letter or digit is followed by an uppercase
/// letter.
pub fn field_case(column: &str) -> String {
    let mut out = String::with_capacity(column.len() + 4);
    let mut prev_lower = false;
    for c in column.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
