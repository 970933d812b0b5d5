use std::any::TypeId;

/// Address of a field within one record type: the owning type plus the
/// field's declaration index. Holds no reference into a record instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLocator {
    record: TypeId,
    index: usize,
}

impl FieldLocator {
    pub fn new(record: TypeId, index: usize) -> Self {
        FieldLocator { record, index }
    }

    pub fn record(&self) -> TypeId {
        self.record
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
