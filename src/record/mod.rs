pub mod access;
pub mod field;
pub mod locator;
pub mod macros;
pub mod record_type;

pub use access::Record;
pub use field::{Assign, FieldValue};
pub use locator::FieldLocator;
pub use record_type::{FieldDesc, RecordType};
