use std::any::TypeId;

use crate::row::Kind;

use super::{FieldLocator, FieldValue};

/// Description of one field of a record: its name, declared kind,
/// nullability and binding labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDesc {
    name: &'static str,
    kind: Kind,
    nullable: bool,
    tags: Vec<(&'static str, &'static str)>,
}

impl FieldDesc {
    pub fn new(name: &'static str, kind: Kind) -> Self {
        FieldDesc {
            name: name.strip_prefix("r#").unwrap_or(name),
            kind,
            nullable: false,
            tags: Vec::new(),
        }
    }

    /// Descriptor for a field of Rust type `T`.
    pub fn of<T: FieldValue>(name: &'static str) -> Self {
        Self::new(name, T::KIND).nullable(T::NULLABLE)
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Attach a binding label under `key`, e.g. `with_tag("cql", "timeline")`.
    pub fn with_tag(mut self, key: &'static str, label: &'static str) -> Self {
        self.tags.push((key, label));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Label of this field under `key`, if any.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }
}

/// Shape of a caller's record: an ordered set of named fields.
/// Built once per Rust type and shared as `&'static`.
#[derive(Debug, Clone)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    fields: Vec<FieldDesc>,
}

impl RecordType {
    pub fn of<R: 'static>(name: &'static str) -> Self {
        RecordType {
            id: TypeId::of::<R>(),
            name,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDesc) -> Self {
        self.add_field(field);
        self
    }

    pub fn add_field(&mut self, field: FieldDesc) {
        self.fields.push(field);
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    pub fn has_field(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f.name == field_name)
    }

    /// Locate a field by its exact name.
    pub fn field(&self, field_name: &str) -> Option<FieldLocator> {
        self.position(|f| f.name == field_name)
    }

    /// Locate the first field whose label under `key` equals `label`.
    pub fn field_by_tag(&self, key: &str, label: &str) -> Option<FieldLocator> {
        self.position(|f| f.tag(key) == Some(label))
    }

    /// Descriptor behind `locator`, or `None` if the locator belongs to
    /// another record type or is out of range.
    pub fn desc(&self, locator: FieldLocator) -> Option<&FieldDesc> {
        if locator.record() != self.id {
            return None;
        }
        self.fields.get(locator.index())
    }

    fn position(&self, pred: impl Fn(&FieldDesc) -> bool) -> Option<FieldLocator> {
        self.fields
            .iter()
            .position(pred)
            .map(|index| FieldLocator::new(self.id, index))
    }
}
