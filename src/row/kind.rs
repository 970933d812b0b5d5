use std::fmt;

/// Declared kind of a column or of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Int,
    BigInt,
    Double,
    Text,
    Uuid,
    Blob,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Int => "int",
            Kind::BigInt => "bigint",
            Kind::Double => "double",
            Kind::Text => "text",
            Kind::Uuid => "uuid",
            Kind::Blob => "blob",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
