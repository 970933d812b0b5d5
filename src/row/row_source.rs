use crate::error::BindResult;

use super::{ColumnSpec, Value};

/// The `RowSource` trait is the cursor over query result rows that a
/// `Binding` consumes. Implementations belong to the driver layer.
pub trait RowSource {
    /// Columns of the current row, in native order. Sources with
    /// heterogeneous rows may return a different list after each `next`.
    fn columns(&self) -> &[ColumnSpec];

    /// Advance to the next row. `Ok(false)` means the source is exhausted,
    /// `Err` is an iteration fault.
    fn next(&mut self) -> BindResult<bool>;

    /// Take the value of the column at `index` in the current row.
    fn value(&mut self, index: usize) -> BindResult<Value>;

    /// Release the source. Calling it again has no effect.
    fn close(&mut self) -> BindResult<()>;
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn columns(&self) -> &[ColumnSpec] {
        (**self).columns()
    }

    fn next(&mut self) -> BindResult<bool> {
        (**self).next()
    }

    fn value(&mut self, index: usize) -> BindResult<Value> {
        (**self).value(index)
    }

    fn close(&mut self) -> BindResult<()> {
        (**self).close()
    }
}
