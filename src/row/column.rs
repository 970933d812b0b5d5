use super::Kind;

/// Name and kind of one column of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    name: String,
    kind: Kind,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        ColumnSpec {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}
