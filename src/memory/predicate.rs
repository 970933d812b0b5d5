use crate::error::BindResult;
use crate::parse::Literal;
use crate::row::{ColumnSpec, Value};

use super::memory_db::column_index;

/// A `column = literal` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    column: String,
    value: Literal,
}

impl Term {
    pub fn new(column: impl Into<String>, value: Literal) -> Self {
        Term {
            column: column.into(),
            value,
        }
    }

    pub fn is_satisfied(&self, columns: &[ColumnSpec], row: &[Value], args: &[Value]) -> BindResult<bool> {
        let index = column_index(columns, &self.column)?;
        let expected = self.value.bind(columns[index].kind(), args)?;
        // NULL never compares equal
        Ok(!expected.is_null() && row.get(index) == Some(&expected))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.column, self.value)
    }
}

/// Conjunction of terms. An empty predicate is satisfied by every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    terms: Vec<Term>,
}

impl Predicate {
    pub fn new(term: Term) -> Self {
        Predicate { terms: vec![term] }
    }

    pub fn conjoin_with(mut self, other: Predicate) -> Self {
        self.terms.extend(other.terms);
        self
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_satisfied(&self, columns: &[ColumnSpec], row: &[Value], args: &[Value]) -> BindResult<bool> {
        for term in &self.terms {
            if !term.is_satisfied(columns, row, args)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.terms.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for term in iter {
            write!(f, " and {}", term)?;
        }
        Ok(())
    }
}
