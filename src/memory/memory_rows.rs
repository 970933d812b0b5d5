use crate::error::{BindError, BindResult};
use crate::row::{ColumnSpec, RowSource, Value};

/// A `RowSource` over rows held in memory.
///
/// Values are moved out as the binding takes them, so each column of a row
/// can be read once; a second read yields `Value::Null`.
#[derive(Debug)]
pub struct MemoryRows {
    columns: Vec<ColumnSpec>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Vec<Value>,
    produced: usize,
    fault: Option<(usize, String)>,
    closed: bool,
}

impl MemoryRows {
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<Vec<Value>>) -> Self {
        MemoryRows {
            columns,
            rows: rows.into_iter(),
            current: Vec::new(),
            produced: 0,
            fault: None,
            closed: false,
        }
    }

    /// Makes `next` fail with `message` once `rows` rows have been produced,
    /// the way a dropped connection interrupts a result stream.
    pub fn fail_after(mut self, rows: usize, message: impl Into<String>) -> Self {
        self.fault = Some((rows, message.into()));
        self
    }

    /// Rows not yet produced.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RowSource for MemoryRows {
    fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    fn next(&mut self) -> BindResult<bool> {
        if self.closed {
            return Err(BindError::Source("Rows are closed".to_string()));
        }
        if let Some((after, message)) = &self.fault {
            if self.produced >= *after {
                return Err(BindError::Source(message.clone()));
            }
        }

        match self.rows.next() {
            Some(row) => {
                self.current = row;
                self.produced += 1;
                Ok(true)
            }
            None => {
                self.current.clear();
                Ok(false)
            }
        }
    }

    fn value(&mut self, index: usize) -> BindResult<Value> {
        if self.closed {
            return Err(BindError::Source("Rows are closed".to_string()));
        }
        self.current
            .get_mut(index)
            .map(std::mem::take)
            .ok_or_else(|| BindError::Source(format!("No value for column {}", index)))
    }

    fn close(&mut self) -> BindResult<()> {
        self.closed = true;
        self.rows = Vec::new().into_iter();
        self.current.clear();
        Ok(())
    }
}
