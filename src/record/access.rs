use super::{Assign, FieldLocator, RecordType};

/// A structure that rows can be scanned into.
///
/// Usually implemented with the [`record!`](crate::record!) macro. A
/// hand-written impl must keep `field_mut` in step with the field order of
/// `record_type`.
pub trait Record: 'static {
    fn record_type() -> &'static RecordType
    where
        Self: Sized;

    /// Slot of the field declared at `index`, `None` if out of range.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Assign>;

    /// Locator of the field named `field_name`.
    fn locate(field_name: &str) -> Option<FieldLocator>
    where
        Self: Sized,
    {
        Self::record_type().field(field_name)
    }
}
