//! The dynamic value supertype and the binding between Rust element types and
//! their `ScalarType` tags.
//!
//! `SimpleData` is deliberately open: any `'static` value can be presented as
//! one, which is what lets the validator notice kinds outside the universal set.
//! `Scalar` is closed: it is implemented here, once per admissible kind, and
//! nowhere else.

use super::scalar_type::ScalarType;
use crate::storage::ColumnStorage;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// A dynamically-typed column element.
///
/// Every producer is expected to hand over only values whose concrete kind is
/// registered; `ensure_simple_data` enforces that at the closed-world seams.
///
/// `Box<dyn SimpleData>` is itself a `SimpleData`, so owned values can be
/// presented as-is; the registry looks through the box via [`unboxed`].
pub trait SimpleData: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// The Rust type name of the concrete value, used in diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> SimpleData for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Peels `Box<dyn SimpleData>` layers off a value so lookups and diagnostics
/// see the concrete kind inside.
pub fn unboxed(value: &dyn SimpleData) -> &dyn SimpleData {
    let mut value = value;
    while let Some(inner) = value.as_any().downcast_ref::<Box<dyn SimpleData>>() {
        value = &**inner;
    }
    value
}

/// A pointer-sized unsigned integer stored as an address-like value.
///
/// Distinct from `usize` (the `uint` kind) so every kind keeps its own Rust type.
#[repr(transparent)]
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct UintPtr(pub usize);

impl From<usize> for UintPtr {
    fn from(v: usize) -> Self {
        UintPtr(v)
    }
}

impl ToPrimitive for UintPtr {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        ToPrimitive::to_f64(&self.0)
    }
}

/// An admissible column element type.
pub trait Scalar: SimpleData + Sized {
    /// The registry tag for this Rust type.
    const KIND: ScalarType;

    /// Allocates an empty column of this kind.
    fn new_column() -> ColumnStorage;

    /// Typed view of a column, `None` if the column holds another kind.
    fn column(storage: &ColumnStorage) -> Option<&Vec<Self>>;

    /// Typed mutable view of a column, `None` if the column holds another kind.
    fn column_mut(storage: &mut ColumnStorage) -> Option<&mut Vec<Self>>;

    /// Lossy numeric view used by aggregations. Non-numeric kinds return `None`.
    fn to_f64(&self) -> Option<f64>;
}

macro_rules! impl_scalar {
    (@impl $T:ty, $kind:ident, $view:expr) => {
        impl Scalar for $T {
            const KIND: ScalarType = ScalarType::$kind;

            fn new_column() -> ColumnStorage {
                ColumnStorage::$kind(Vec::new())
            }

            fn column(storage: &ColumnStorage) -> Option<&Vec<Self>> {
                match storage {
                    ColumnStorage::$kind(v) => Some(v),
                    _ => None,
                }
            }

            fn column_mut(storage: &mut ColumnStorage) -> Option<&mut Vec<Self>> {
                match storage {
                    ColumnStorage::$kind(v) => Some(v),
                    _ => None,
                }
            }

            fn to_f64(&self) -> Option<f64> {
                ($view)(self)
            }
        }
    };
    ($T:ty, $kind:ident, numeric) => {
        impl_scalar!(@impl $T, $kind, |v: &$T| ToPrimitive::to_f64(v));
    };
    ($T:ty, $kind:ident, other) => {
        impl_scalar!(@impl $T, $kind, |_: &$T| None);
    };
}

impl_scalar!(String, String, other);
impl_scalar!(bool, Bool, other);
impl_scalar!(isize, Int, numeric);
impl_scalar!(i8, Int8, numeric);
impl_scalar!(i16, Int16, numeric);
impl_scalar!(i32, Int32, numeric);
impl_scalar!(i64, Int64, numeric);
impl_scalar!(usize, UInt, numeric);
impl_scalar!(u8, UInt8, numeric);
impl_scalar!(u16, UInt16, numeric);
impl_scalar!(u32, UInt32, numeric);
impl_scalar!(u64, UInt64, numeric);
impl_scalar!(UintPtr, UIntPtr, numeric);
impl_scalar!(f32, Float32, numeric);
impl_scalar!(f64, Float64, numeric);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_scalar_kinds_match_builtin_categories() {
        assert_eq!(<i64 as Scalar>::KIND, ScalarType::Int64);
        assert_eq!(<String as Scalar>::KIND, ScalarType::String);
        assert_eq!(<usize as Scalar>::KIND, ScalarType::UInt);
        assert_eq!(Scalar::to_f64(&7u16), Some(7.0));
        assert_eq!(Scalar::to_f64(&true), None);
        assert_eq!(<UintPtr as Scalar>::KIND, ScalarType::UIntPtr);
        assert_eq!(Scalar::to_f64(&UintPtr(4096)), Some(4096.0));
    }

    #[test]
    fn test_boxed_value_reports_inner_type() {
        let boxed: Box<dyn SimpleData> = Box::new(3i32);
        assert_eq!((*boxed).type_name(), "i32");
        assert!((*boxed).as_any().is::<i32>());
    }

    #[test]
    fn test_unboxed_peels_nested_boxes() {
        let boxed: Box<dyn SimpleData> = Box::new(3i32);
        let nested: Box<dyn SimpleData> = Box::new(boxed);
        let value: &dyn SimpleData = &nested;
        assert!(value.type_name().contains("Box"));
        assert_eq!(unboxed(value).type_name(), "i32");
        assert_eq!(unboxed(&5u8).type_name(), "u8");
    }

    #[test]
    fn test_uintptr_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&UintPtr(17)).unwrap(), "17");
        assert_eq!(UintPtr::from(3usize), UintPtr(3));
    }

    #[test]
    fn test_any_value_is_presentable() {
        let map: HashMap<String, i32> = HashMap::new();
        let value: &dyn SimpleData = &map;
        assert!(value.type_name().contains("HashMap"));
    }
}
