/// Declares a struct and implements [`Record`](crate::record::Record) for it.
///
/// Fields may carry binding labels through a `#[tag(key = "label", ...)]`
/// attribute, used by `Binding::by_tag`. Doc comments on a field go before its
/// `#[tag]`. Other field attributes are not accepted.
///
/// ```ignore
/// rowbind::record! {
///     #[derive(Debug, Default)]
///     pub struct TaggedTweet {
///         /// Owner of the timeline.
///         #[tag(cql = "timeline")]
///         pub timeline: String,
///         #[tag(cql = "id")]
///         pub id: Uuid,
///         #[tag(cql = "text")]
///         pub text: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $field_doc:literal])*
                $(#[tag($($key:ident = $label:literal),+ $(,)?)])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $field_doc])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::record::Record for $name {
            fn record_type() -> &'static $crate::record::RecordType {
                static RECORD_TYPE: ::std::sync::OnceLock<$crate::record::RecordType> =
                    ::std::sync::OnceLock::new();
                RECORD_TYPE.get_or_init(|| {
                    $crate::record::RecordType::of::<$name>(stringify!($name))
                        $(
                            .with_field(
                                $crate::record::FieldDesc::of::<$ty>(stringify!($field))
                                    $($(.with_tag(stringify!($key), $label))+)?
                            )
                        )*
                })
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn field_mut(&mut self, index: usize) -> Option<&mut dyn $crate::record::Assign> {
                let mut position = 0usize;
                $(
                    if position == index {
                        return Some(&mut self.$field as &mut dyn $crate::record::Assign);
                    }
                    position += 1;
                )*
                None
            }
        }
    };
}
