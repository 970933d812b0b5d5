use thiserror::Error;

use crate::row::Kind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("Type mismatch for column {column} into field {field}: expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        field: String,
        expected: Kind,
        found: Kind,
    },

    #[error("Null value for column {column} into non-nullable field {field}")]
    NullValue { column: String, field: String },

    #[error("Column {column} resolved to a field that does not belong to {record}")]
    ForeignField { column: String, record: &'static str },

    #[error("Row source error: {0}")]
    Source(String),

    #[error("Binding is closed")]
    Closed,

    #[error("Query error: {0}")]
    Query(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

pub type BindResult<T> = std::result::Result<T, BindError>;
