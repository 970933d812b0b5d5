pub mod literal;

pub use literal::Literal;

use sqlparser::ast::{
    BinaryOperator, Expr, SelectItem, SetExpr, Statement as SqlStatement, TableFactor,
    UnaryOperator, Value as SqlValue,
};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser as SqlParser;

use crate::error::{BindError, BindResult};
use crate::memory::{Predicate, Term};
use crate::row::{ColumnSpec, Kind};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable {
        table_name: String,
        columns: Vec<ColumnSpec>,
    },
    Insert {
        table_name: String,
        fields: Vec<String>,
        rows: Vec<Vec<Literal>>,
    },
    Query {
        /// `None` for `SELECT *`.
        fields: Option<Vec<String>>,
        table_name: String,
        predicate: Predicate,
    },
}

/// Parses the statements understood by `MemoryDb`.
#[derive(Debug, Default)]
pub struct Parser {
    dialect: GenericDialect,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            dialect: GenericDialect::default(),
        }
    }

    pub fn parse(&self, sql: &str) -> BindResult<Statement> {
        let ast = SqlParser::parse_sql(&self.dialect, sql)
            .map_err(|e| BindError::Query(format!("Failed to parse SQL: {}", e)))?;

        if ast.is_empty() {
            return Err(BindError::Query("Empty SQL statement".to_string()));
        }

        // placeholders are numbered across the whole statement
        let mut placeholders = 0;
        match &ast[0] {
            SqlStatement::CreateTable(create_table) => self.parse_create_table(create_table),
            SqlStatement::Insert(insert) => self.parse_insert(insert, &mut placeholders),
            SqlStatement::Query(query) => self.parse_select(&query.body, &mut placeholders),
            _ => Err(BindError::Query("Unsupported SQL statement".to_string())),
        }
    }

    fn parse_create_table(
        &self,
        create_table: &sqlparser::ast::CreateTable,
    ) -> BindResult<Statement> {
        let table_name = create_table.name.to_string();

        let columns = create_table
            .columns
            .iter()
            .map(|col| {
                let field_name = col.name.value.clone();
                let data_type = col.data_type.to_string();
                let kind = kind_of(&data_type).ok_or_else(|| {
                    BindError::Query(format!(
                        "Unsupported data type {} for column {}",
                        data_type, field_name
                    ))
                })?;
                Ok(ColumnSpec::new(field_name, kind))
            })
            .collect::<BindResult<Vec<ColumnSpec>>>()?;

        if columns.is_empty() {
            return Err(BindError::Query("No columns provided".to_string()));
        }

        Ok(Statement::CreateTable {
            table_name,
            columns,
        })
    }

    fn parse_insert(
        &self,
        insert: &sqlparser::ast::Insert,
        placeholders: &mut usize,
    ) -> BindResult<Statement> {
        let table_name = insert.table.to_string();

        if insert.columns.is_empty() {
            return Err(BindError::Query("No columns provided".to_string()));
        }
        let fields = insert
            .columns
            .iter()
            .map(|col| col.value.clone())
            .collect::<Vec<String>>();

        let values = match insert.source.as_ref().map(|query| &*query.body) {
            Some(SetExpr::Values(values)) => values,
            _ => {
                return Err(BindError::Query(
                    "Only VALUES clause is supported for INSERT".to_string(),
                ));
            }
        };
        if values.rows.is_empty() {
            return Err(BindError::Query("No values provided for INSERT".to_string()));
        }

        let mut rows = Vec::with_capacity(values.rows.len());
        for row in &values.rows {
            if row.len() != fields.len() {
                return Err(BindError::Query(format!(
                    "Expected {} values, found {}",
                    fields.len(),
                    row.len()
                )));
            }
            let literals = row
                .iter()
                .map(|expr| self.parse_literal(expr, placeholders))
                .collect::<BindResult<Vec<Literal>>>()?;
            rows.push(literals);
        }

        Ok(Statement::Insert {
            table_name,
            fields,
            rows,
        })
    }

    fn parse_select(&self, query: &SetExpr, placeholders: &mut usize) -> BindResult<Statement> {
        let select = match query {
            SetExpr::Select(select) => select,
            _ => {
                return Err(BindError::Query(
                    "Only simple SELECT queries are supported".to_string(),
                ));
            }
        };

        let fields = if matches!(select.projection.as_slice(), [SelectItem::Wildcard(_)]) {
            None
        } else {
            let fields = select
                .projection
                .iter()
                .map(|item| match item {
                    SelectItem::UnnamedExpr(Expr::Identifier(ident)) => Ok(ident.value.clone()),
                    _ => Err(BindError::Query(
                        "Only simple column references are supported".to_string(),
                    )),
                })
                .collect::<BindResult<Vec<String>>>()?;
            Some(fields)
        };

        let table_name = match select.from.as_slice() {
            [table_with_join] if table_with_join.joins.is_empty() => {
                match &table_with_join.relation {
                    TableFactor::Table { name, .. } => name.to_string(),
                    _ => {
                        return Err(BindError::Query(
                            "Only simple table references are supported".to_string(),
                        ));
                    }
                }
            }
            _ => {
                return Err(BindError::Query(
                    "Exactly one table must be selected from".to_string(),
                ));
            }
        };

        let predicate = match &select.selection {
            Some(where_clause) => self.parse_where_clause(where_clause, placeholders)?,
            None => Predicate::default(),
        };

        Ok(Statement::Query {
            fields,
            table_name,
            predicate,
        })
    }

    fn parse_where_clause(&self, expr: &Expr, placeholders: &mut usize) -> BindResult<Predicate> {
        match expr {
            Expr::BinaryOp { left, op, right } => match op {
                BinaryOperator::Eq => {
                    let field = match &**left {
                        Expr::Identifier(ident) => ident.value.clone(),
                        _ => {
                            return Err(BindError::Query(
                                "Left side of = must be a column name".to_string(),
                            ));
                        }
                    };
                    let value = self.parse_literal(right, placeholders)?;
                    Ok(Predicate::default().with_term(Term::new(field, value)))
                }
                BinaryOperator::And => {
                    let left_pred = self.parse_where_clause(left, placeholders)?;
                    let right_pred = self.parse_where_clause(right, placeholders)?;
                    Ok(left_pred.conjoin_with(right_pred))
                }
                _ => Err(BindError::Query(
                    "Only = and AND operators are supported in WHERE clause".to_string(),
                )),
            },
            Expr::Nested(inner) => self.parse_where_clause(inner, placeholders),
            _ => Err(BindError::Query(
                "Unsupported expression in WHERE clause".to_string(),
            )),
        }
    }

    fn parse_literal(&self, expr: &Expr, placeholders: &mut usize) -> BindResult<Literal> {
        match expr {
            Expr::Value(value) => match &value.value {
                SqlValue::Null => Ok(Literal::Null),
                SqlValue::Boolean(b) => Ok(Literal::Boolean(*b)),
                SqlValue::Number(n, _) => Ok(Literal::Number(n.to_string())),
                SqlValue::SingleQuotedString(s) => Ok(Literal::String(s.clone())),
                SqlValue::Placeholder(p) => placeholder(p, placeholders),
                _ => Err(BindError::Query("Unsupported value type".to_string())),
            },
            Expr::UnaryOp {
                op: UnaryOperator::Minus,
                expr,
            } => match self.parse_literal(expr, placeholders)? {
                Literal::Number(n) => Ok(Literal::Number(format!("-{}", n))),
                _ => Err(BindError::Query("Only numbers can be negated".to_string())),
            },
            _ => Err(BindError::Query(
                "Only literal values and placeholders are supported".to_string(),
            )),
        }
    }
}

/// `?` takes the next argument, `$n` names argument `n` explicitly.
fn placeholder(text: &str, next: &mut usize) -> BindResult<Literal> {
    if text == "?" {
        let index = *next;
        *next += 1;
        return Ok(Literal::Placeholder(index));
    }
    match text.strip_prefix('$').and_then(|n| n.parse::<usize>().ok()) {
        Some(n) if n > 0 => Ok(Literal::Placeholder(n - 1)),
        _ => Err(BindError::Query(format!("Unsupported placeholder {}", text))),
    }
}

fn kind_of(data_type: &str) -> Option<Kind> {
    let upper = data_type.to_ascii_uppercase();
    let base = upper.split('(').next().unwrap_or("").trim();
    match base {
        "INT" | "INTEGER" => Some(Kind::Int),
        "BIGINT" => Some(Kind::BigInt),
        "TEXT" | "VARCHAR" | "STRING" => Some(Kind::Text),
        "UUID" | "TIMEUUID" => Some(Kind::Uuid),
        "BOOLEAN" | "BOOL" => Some(Kind::Boolean),
        "DOUBLE" | "DOUBLE PRECISION" | "FLOAT" | "REAL" => Some(Kind::Double),
        "BLOB" | "BYTEA" => Some(Kind::Blob),
        _ => None,
    }
}
