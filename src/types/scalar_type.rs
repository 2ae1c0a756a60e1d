//! This module defines the canonical, type-safe tag for every scalar kind a
//! column may hold, together with its category and canonical name.

use crate::error::SimpleDataError;
use arrow_schema::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reserved dtype identifier for a column whose element kind is not yet known.
/// It is never the name of a `ScalarType`.
pub const EMPTY_DTYPE: &str = "empty";

/// The two disjoint halves of the universal set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Numeric,
    Other,
}

/// One concrete primitive kind admissible as a column element.
///
/// The serialized form of each variant is its canonical dtype name, so a
/// `ScalarType` can sit directly inside persisted column metadata.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "uint")]
    UInt,
    #[serde(rename = "uint8")]
    UInt8,
    #[serde(rename = "uint16")]
    UInt16,
    #[serde(rename = "uint32")]
    UInt32,
    #[serde(rename = "uint64")]
    UInt64,
    #[serde(rename = "uintptr")]
    UIntPtr,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
}

impl ScalarType {
    /// Every builtin kind, `Other` kinds first.
    pub const ALL: [ScalarType; 15] = [
        Self::String,
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::UIntPtr,
        Self::Float32,
        Self::Float64,
    ];

    /// The canonical dtype name. Part of the persisted format; do not rename.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt => "uint",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::UIntPtr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Resolves a canonical name. `"empty"` and anything unknown yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// The builtin category of this kind. Integers and floats are numeric;
    /// strings and booleans are not.
    pub fn category(&self) -> Category {
        match self {
            Self::String | Self::Bool => Category::Other,
            _ => Category::Numeric,
        }
    }

    /// Returns `true` if the builtin category of this kind is `Numeric`.
    pub fn is_numeric(&self) -> bool {
        self.category() == Category::Numeric
    }

    /// Returns `true` if the data type is a signed integer.
    pub fn is_signed_int(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Returns `true` if the data type is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Converts a `ScalarType` into the Arrow `DataType` used to store it.
    /// The pointer-sized kinds map onto the fixed width of the build target.
    pub fn to_arrow_type(&self) -> ArrowDataType {
        match self {
            Self::String => ArrowDataType::Utf8,
            Self::Bool => ArrowDataType::Boolean,
            #[cfg(target_pointer_width = "64")]
            Self::Int => ArrowDataType::Int64,
            #[cfg(not(target_pointer_width = "64"))]
            Self::Int => ArrowDataType::Int32,
            Self::Int8 => ArrowDataType::Int8,
            Self::Int16 => ArrowDataType::Int16,
            Self::Int32 => ArrowDataType::Int32,
            Self::Int64 => ArrowDataType::Int64,
            #[cfg(target_pointer_width = "64")]
            Self::UInt | Self::UIntPtr => ArrowDataType::UInt64,
            #[cfg(not(target_pointer_width = "64"))]
            Self::UInt | Self::UIntPtr => ArrowDataType::UInt32,
            Self::UInt8 => ArrowDataType::UInt8,
            Self::UInt16 => ArrowDataType::UInt16,
            Self::UInt32 => ArrowDataType::UInt32,
            Self::UInt64 => ArrowDataType::UInt64,
            Self::Float32 => ArrowDataType::Float32,
            Self::Float64 => ArrowDataType::Float64,
        }
    }

    /// Converts an Arrow `DataType` into a `ScalarType`. Fixed-width Arrow
    /// integers always resolve to the sized kinds, never to `int`/`uint`/`uintptr`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Result<Self, SimpleDataError> {
        match arrow_type {
            ArrowDataType::Utf8 | ArrowDataType::LargeUtf8 => Ok(Self::String),
            ArrowDataType::Boolean => Ok(Self::Bool),
            ArrowDataType::Int8 => Ok(Self::Int8),
            ArrowDataType::Int16 => Ok(Self::Int16),
            ArrowDataType::Int32 => Ok(Self::Int32),
            ArrowDataType::Int64 => Ok(Self::Int64),
            ArrowDataType::UInt8 => Ok(Self::UInt8),
            ArrowDataType::UInt16 => Ok(Self::UInt16),
            ArrowDataType::UInt32 => Ok(Self::UInt32),
            ArrowDataType::UInt64 => Ok(Self::UInt64),
            ArrowDataType::Float32 => Ok(Self::Float32),
            ArrowDataType::Float64 => Ok(Self::Float64),
            dt => Err(SimpleDataError::UnsupportedType(format!(
                "Cannot convert Arrow type {:?} to a SimpleData kind",
                dt
            ))),
        }
    }
}

/// Provides the canonical string representation for a `ScalarType`.
impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = SimpleDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SimpleDataError::InvalidDtype(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_resolve_back() {
        let names: HashSet<&str> = ScalarType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), ScalarType::ALL.len());
        for t in ScalarType::ALL {
            assert_eq!(ScalarType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_empty_is_reserved() {
        assert!(ScalarType::from_name(EMPTY_DTYPE).is_none());
        assert!(matches!(
            "empty".parse::<ScalarType>(),
            Err(SimpleDataError::InvalidDtype(ref s)) if s == "empty"
        ));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ScalarType::UInt16).unwrap();
        assert_eq!(json, "\"uint16\"");
        let back: ScalarType = serde_json::from_str("\"float64\"").unwrap();
        assert_eq!(back, ScalarType::Float64);
        assert!(serde_json::from_str::<ScalarType>("\"date\"").is_err());
    }

    #[test]
    fn test_arrow_mapping() {
        assert_eq!(ScalarType::Int32.to_arrow_type(), ArrowDataType::Int32);
        assert_eq!(ScalarType::String.to_arrow_type(), ArrowDataType::Utf8);
        assert_eq!(
            ScalarType::from_arrow_type(&ArrowDataType::Boolean).unwrap(),
            ScalarType::Bool
        );
        assert!(ScalarType::from_arrow_type(&ArrowDataType::Date32).is_err());

        // Every Arrow float resolves to a float kind and back to the same width.
        for dt in [ArrowDataType::Float32, ArrowDataType::Float64] {
            let kind = ScalarType::from_arrow_type(&dt).unwrap();
            assert!(kind.is_float());
            assert_eq!(kind.to_arrow_type(), dt);
        }
        assert!(!ScalarType::Int64.is_float());
        assert_eq!(
            ScalarType::UIntPtr.to_arrow_type(),
            ScalarType::UInt.to_arrow_type()
        );
    }

    #[test]
    fn test_builtin_categories() {
        assert!(ScalarType::Float32.is_numeric());
        assert!(ScalarType::UInt.is_numeric());
        assert!(!ScalarType::Bool.is_numeric());
        assert_eq!(ScalarType::String.category(), Category::Other);
        assert!(ScalarType::Int.is_signed_int());
        assert!(!ScalarType::UInt8.is_signed_int());
        assert!(ScalarType::UIntPtr.is_numeric());
        assert_eq!(ScalarType::from_name("uintptr"), Some(ScalarType::UIntPtr));
    }
}
