pub mod column;
pub mod kind;
pub mod row_source;
pub mod value;

pub use column::ColumnSpec;
pub use kind::Kind;
pub use row_source::RowSource;
pub use value::Value;
