//! Typed, growable column storage as handed out by the factory.
//!
//! Each variant owns a plain `Vec` over exactly one element kind, so a column
//! can never hold a value outside its declared kind. `Empty` holds boxed
//! `SimpleData` for columns whose kind has not been inferred yet.

use crate::types::{Scalar, ScalarType, SimpleData, UintPtr, EMPTY_DTYPE};

#[derive(Debug)]
pub enum ColumnStorage {
    Empty(Vec<Box<dyn SimpleData>>),
    String(Vec<String>),
    Bool(Vec<bool>),
    Int(Vec<isize>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt(Vec<usize>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    UIntPtr(Vec<UintPtr>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Applies the same expression to the inner `Vec` of any variant.
macro_rules! with_vec {
    ($storage:expr, $v:ident => $body:expr) => {
        match $storage {
            ColumnStorage::Empty($v) => $body,
            ColumnStorage::String($v) => $body,
            ColumnStorage::Bool($v) => $body,
            ColumnStorage::Int($v) => $body,
            ColumnStorage::Int8($v) => $body,
            ColumnStorage::Int16($v) => $body,
            ColumnStorage::Int32($v) => $body,
            ColumnStorage::Int64($v) => $body,
            ColumnStorage::UInt($v) => $body,
            ColumnStorage::UInt8($v) => $body,
            ColumnStorage::UInt16($v) => $body,
            ColumnStorage::UInt32($v) => $body,
            ColumnStorage::UInt64($v) => $body,
            ColumnStorage::UIntPtr($v) => $body,
            ColumnStorage::Float32($v) => $body,
            ColumnStorage::Float64($v) => $body,
        }
    };
}

impl ColumnStorage {
    /// The element kind, or `None` for an untyped (`"empty"`) column.
    pub fn kind(&self) -> Option<ScalarType> {
        match self {
            Self::Empty(_) => None,
            Self::String(_) => Some(ScalarType::String),
            Self::Bool(_) => Some(ScalarType::Bool),
            Self::Int(_) => Some(ScalarType::Int),
            Self::Int8(_) => Some(ScalarType::Int8),
            Self::Int16(_) => Some(ScalarType::Int16),
            Self::Int32(_) => Some(ScalarType::Int32),
            Self::Int64(_) => Some(ScalarType::Int64),
            Self::UInt(_) => Some(ScalarType::UInt),
            Self::UInt8(_) => Some(ScalarType::UInt8),
            Self::UInt16(_) => Some(ScalarType::UInt16),
            Self::UInt32(_) => Some(ScalarType::UInt32),
            Self::UInt64(_) => Some(ScalarType::UInt64),
            Self::UIntPtr(_) => Some(ScalarType::UIntPtr),
            Self::Float32(_) => Some(ScalarType::Float32),
            Self::Float64(_) => Some(ScalarType::Float64),
        }
    }

    /// The dtype identifier this storage was created from.
    pub fn dtype(&self) -> &'static str {
        self.kind().map_or(EMPTY_DTYPE, |k| k.name())
    }

    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_vec<T: Scalar>(&self) -> Option<&Vec<T>> {
        T::column(self)
    }

    pub fn as_vec_mut<T: Scalar>(&mut self) -> Option<&mut Vec<T>> {
        T::column_mut(self)
    }

    /// Mutable access to an untyped column's values.
    pub fn as_dynamic_mut(&mut self) -> Option<&mut Vec<Box<dyn SimpleData>>> {
        match self {
            Self::Empty(v) => Some(v),
            _ => None,
        }
    }
}
