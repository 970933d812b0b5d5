use std::collections::HashMap;

use tracing::debug;

use crate::error::{BindError, BindResult};
use crate::parse::{Parser, Statement};
use crate::row::{ColumnSpec, Value};

use super::MemoryRows;

#[derive(Debug, Clone)]
struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Value>>,
}

/// A set of in-memory tables driven by a small SQL subset:
/// `CREATE TABLE`, `INSERT INTO ... VALUES` and single-table `SELECT` with
/// `column = value` terms joined by `AND`. Statements take positional
/// arguments for their `?` / `$n` placeholders.
#[derive(Debug, Default)]
pub struct MemoryDb {
    tables: HashMap<String, Table>,
    parser: Parser,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a `CREATE TABLE` or `INSERT` statement and returns the number of
    /// rows inserted.
    pub fn execute(&mut self, sql: &str, args: &[Value]) -> BindResult<usize> {
        match self.parser.parse(sql)? {
            Statement::CreateTable {
                table_name,
                columns,
            } => {
                self.create_table(&table_name, columns)?;
                Ok(0)
            }
            Statement::Insert {
                table_name,
                fields,
                rows,
            } => {
                let table = self.table_mut(&table_name)?;
                let positions = fields
                    .iter()
                    .map(|field| column_index(&table.columns, field))
                    .collect::<BindResult<Vec<usize>>>()?;

                let mut inserted = Vec::with_capacity(rows.len());
                for literals in &rows {
                    let mut row = vec![Value::Null; table.columns.len()];
                    for (&position, literal) in positions.iter().zip(literals) {
                        row[position] = literal.bind(table.columns[position].kind(), args)?;
                    }
                    inserted.push(row);
                }

                let count = inserted.len();
                table.rows.extend(inserted);
                debug!(table = %table_name, rows = count, "rows inserted");
                Ok(count)
            }
            Statement::Query { .. } => Err(BindError::Query(
                "SELECT statements must be run with query".to_string(),
            )),
        }
    }

    /// Runs a `SELECT` statement. The returned rows carry the projected
    /// columns in projection order.
    pub fn query(&self, sql: &str, args: &[Value]) -> BindResult<MemoryRows> {
        let (fields, table_name, predicate) = match self.parser.parse(sql)? {
            Statement::Query {
                fields,
                table_name,
                predicate,
            } => (fields, table_name, predicate),
            _ => {
                return Err(BindError::Query(
                    "Only SELECT statements can be queried".to_string(),
                ));
            }
        };

        let table = self
            .tables
            .get(&table_name)
            .ok_or_else(|| BindError::UnknownTable(table_name.clone()))?;

        let positions = match &fields {
            Some(fields) => fields
                .iter()
                .map(|field| column_index(&table.columns, field))
                .collect::<BindResult<Vec<usize>>>()?,
            None => (0..table.columns.len()).collect(),
        };
        let columns = positions
            .iter()
            .map(|&position| table.columns[position].clone())
            .collect();

        let mut rows = Vec::new();
        for row in &table.rows {
            if predicate.is_satisfied(&table.columns, row, args)? {
                rows.push(positions.iter().map(|&position| row[position].clone()).collect());
            }
        }

        debug!(table = %table_name, %predicate, rows = rows.len(), "query");
        Ok(MemoryRows::new(columns, rows))
    }

    pub fn create_table(&mut self, table_name: &str, columns: Vec<ColumnSpec>) -> BindResult<()> {
        if self.tables.contains_key(table_name) {
            return Err(BindError::Query(format!("Table {} already exists", table_name)));
        }
        self.tables.insert(
            table_name.to_string(),
            Table {
                columns,
                rows: Vec::new(),
            },
        );
        Ok(())
    }

    /// Removes every row of `table_name`, keeping its columns.
    pub fn truncate(&mut self, table_name: &str) -> BindResult<()> {
        self.table_mut(table_name)?.rows.clear();
        Ok(())
    }

    pub fn row_count(&self, table_name: &str) -> BindResult<usize> {
        self.tables
            .get(table_name)
            .map(|table| table.rows.len())
            .ok_or_else(|| BindError::UnknownTable(table_name.to_string()))
    }

    fn table_mut(&mut self, table_name: &str) -> BindResult<&mut Table> {
        self.tables
            .get_mut(table_name)
            .ok_or_else(|| BindError::UnknownTable(table_name.to_string()))
    }
}

pub(crate) fn column_index(columns: &[ColumnSpec], name: &str) -> BindResult<usize> {
    columns
        .iter()
        .position(|c| c.name() == name)
        .ok_or_else(|| BindError::UnknownColumn(name.to_string()))
}
