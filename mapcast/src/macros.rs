/// Implements [`Record`](crate::Record) (and [`Decode`](crate::Decode)) for a struct.
///
/// List the fields that mapping keys may populate. Each entry is one of:
///
/// - `field`: matched by the field's own name
/// - `field = "External"`: matched by the given name
/// - `..field`: an embedded record whose fields are matched as if they were
///   declared here
///
/// Fields that are not listed are never written.
///
/// ```
/// use mapcast::{record, from_mapping, value};
///
/// #[derive(Debug, Default)]
/// struct Audit {
///     created_by: String,
/// }
///
/// #[derive(Debug, Default)]
/// struct Order {
///     id: u64,
///     total: f64,
///     audit: Audit,
///     cache_key: String,
/// }
///
/// record! {
///     Audit { created_by = "createdBy" }
///     Order { id, total, ..audit }
/// }
///
/// let source = value!({ "ID": "42", "total": 9, "createdBy": "ops", "cache_key": "x" });
/// let mut order = Order::default();
/// from_mapping(source.as_mapping().unwrap(), &mut order).unwrap();
/// assert_eq!(order.id, 42);
/// assert_eq!(order.total, 9.0);
/// assert_eq!(order.audit.created_by, "ops");
/// assert_eq!(order.cache_key, "");
/// ```
#[macro_export]
macro_rules! record {
    ($($ty:ty { $($body:tt)* })*) => {
        $(
            $crate::__record!(@munch $ty; []; $($body)*);
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record {
    (@munch $ty:ty; [$($acc:tt)*];) => {
        $crate::__record!(@emit $ty; $($acc)*);
    };
    (@munch $ty:ty; [$($acc:tt)*]; .. $field:ident $(, $($rest:tt)*)?) => {
        $crate::__record!(@munch $ty; [$($acc)* (embedded $field ::core::stringify!($field))]; $($($rest)*)?);
    };
    (@munch $ty:ty; [$($acc:tt)*]; $field:ident = $name:literal $(, $($rest:tt)*)?) => {
        $crate::__record!(@munch $ty; [$($acc)* (named $field $name)]; $($($rest)*)?);
    };
    (@munch $ty:ty; [$($acc:tt)*]; $field:ident $(, $($rest:tt)*)?) => {
        $crate::__record!(@munch $ty; [$($acc)* (named $field ::core::stringify!($field))]; $($($rest)*)?);
    };

    (@emit $ty:ty; $(($mode:ident $field:ident $name:expr))*) => {
        impl $crate::Decode for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::of::<Self>($crate::Kind::Record)
            }

            fn decode_value(
                &mut self,
                value: &$crate::Value,
                options: &$crate::DecodeOptions,
            ) -> $crate::Result<()> {
                $crate::decode_record(self, value, options)
            }

            fn as_fields_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Fields> {
                ::core::option::Option::Some(self)
            }
        }

        impl $crate::Fields for $ty {
            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn $crate::Decode> {
                let mut next = 0usize;
                $(
                    if index == next {
                        return ::core::option::Option::Some(&mut self.$field);
                    }
                    next += 1;
                )*
                ::core::option::Option::None
            }

            fn field_table(&self) -> &'static $crate::FieldTable {
                $crate::FieldTable::of::<Self>()
            }
        }

        impl $crate::Record for $ty {
            fn declared_fields() -> ::std::vec::Vec<$crate::FieldDecl> {
                let mut fields = ::std::vec::Vec::new();
                $(
                    fields.push($crate::__record!(@decl $mode $ty; fields.len(); $field; $name));
                )*
                fields
            }
        }
    };

    (@decl named $ty:ty; $index:expr; $field:ident; $name:expr) => {
        $crate::FieldDecl::named($name, $index)
    };
    (@decl embedded $ty:ty; $index:expr; $field:ident; $name:expr) => {
        $crate::FieldDecl::embedded($name, $index, |record: &$ty| &record.$field)
    };
}
