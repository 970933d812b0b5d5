use uuid::Uuid;

use crate::row::{Kind, Value};

/// A writable field slot. This is what a `Binding` receives from a record
/// when it assigns a column value.
pub trait Assign {
    /// Store `value` into the slot. A value of the wrong kind is handed back
    /// unchanged.
    fn assign(&mut self, value: Value) -> Result<(), Value>;

    /// Reset the slot to its zero value.
    fn reset(&mut self);
}

/// Rust types that can be used as record fields.
pub trait FieldValue: Assign + Default {
    const KIND: Kind;
    const NULLABLE: bool = false;
}

macro_rules! impl_field_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Assign for $ty {
                fn assign(&mut self, value: Value) -> Result<(), Value> {
                    match value {
                        Value::$kind(v) => {
                            *self = v;
                            Ok(())
                        }
                        other => Err(other),
                    }
                }

                fn reset(&mut self) {
                    *self = Default::default();
                }
            }

            impl FieldValue for $ty {
                const KIND: Kind = Kind::$kind;
            }
        )*
    };
}

impl_field_value! {
    bool => Boolean,
    i32 => Int,
    i64 => BigInt,
    f64 => Double,
    String => Text,
    Uuid => Uuid,
    Vec<u8> => Blob,
}

impl<T: FieldValue> Assign for Option<T> {
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        match self {
            Some(inner) => inner.assign(value),
            None => {
                let mut inner = T::default();
                inner.assign(value)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }

    fn reset(&mut self) {
        *self = None;
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: Kind = T::KIND;
    const NULLABLE: bool = true;
}
