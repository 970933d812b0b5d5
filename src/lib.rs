//! Binds the rows of a query result to Rust structs.
//!
//! A [`Binding`] drives a [`RowSource`] and, for every row, resolves each
//! column to a field of the caller's [`Record`] and assigns the value.
//! Columns are resolved by name, by tag, through an explicit map, or by a
//! caller-supplied function.

pub mod binding;
pub mod error;
pub mod memory;
pub mod parse;
pub mod record;
pub mod resolve;
pub mod row;

#[cfg(test)]
pub(crate) mod utils;

pub use crate::binding::{Binding, Config};
pub use crate::error::{BindError, BindResult};
pub use crate::record::{FieldLocator, Record};
pub use crate::row::{ColumnSpec, Kind, RowSource, Value};
