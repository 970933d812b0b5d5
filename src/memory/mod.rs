//! An in-memory `RowSource`, for exercising bindings without a database.

pub mod memory_db;
pub mod memory_rows;
pub mod predicate;

pub use memory_db::MemoryDb;
pub use memory_rows::MemoryRows;
pub use predicate::{Predicate, Term};
