use uuid::Uuid;

use crate::error::{BindError, BindResult};
use crate::row::{Kind, Value};

/// A value as written in a statement, before it is given a column's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Number(String),
    String(String),
    /// Zero-based index into the statement arguments.
    Placeholder(usize),
}

impl Literal {
    /// Produces the value this literal denotes for a column of `kind`.
    /// Placeholder arguments must already be of that kind (or null).
    pub fn bind(&self, kind: Kind, args: &[Value]) -> BindResult<Value> {
        match self {
            Literal::Null => Ok(Value::Null),
            Literal::Placeholder(index) => {
                let arg = args.get(*index).ok_or_else(|| {
                    BindError::Query(format!("Missing argument {}", index + 1))
                })?;
                match arg.kind() {
                    None => Ok(Value::Null),
                    Some(found) if found == kind => Ok(arg.clone()),
                    Some(found) => Err(BindError::Query(format!(
                        "Argument {} is {}, expected {}",
                        index + 1,
                        found,
                        kind
                    ))),
                }
            }
            Literal::Boolean(b) if kind == Kind::Boolean => Ok(Value::Boolean(*b)),
            Literal::Number(n) => match kind {
                Kind::Int => n.parse().map(Value::Int).map_err(|_| invalid(n, kind)),
                Kind::BigInt => n.parse().map(Value::BigInt).map_err(|_| invalid(n, kind)),
                Kind::Double => n.parse().map(Value::Double).map_err(|_| invalid(n, kind)),
                _ => Err(invalid(n, kind)),
            },
            Literal::String(s) => match kind {
                Kind::Text => Ok(Value::Text(s.clone())),
                Kind::Uuid => Uuid::parse_str(s)
                    .map(Value::Uuid)
                    .map_err(|_| invalid(s, kind)),
                _ => Err(invalid(s, kind)),
            },
            Literal::Boolean(b) => Err(invalid(&b.to_string(), kind)),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Null => write!(f, "NULL"),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Placeholder(index) => write!(f, "?{}", index + 1),
        }
    }
}

fn invalid(literal: &str, kind: Kind) -> BindError {
    BindError::Query(format!("Invalid {} value: {}", kind, literal))
}
