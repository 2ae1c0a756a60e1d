//! Numeric classification of dynamically-typed values.

use crate::registry::TypeRegistry;
use crate::types::{unboxed, Category, SimpleData};

impl TypeRegistry {
    /// `true` iff the value's concrete kind is registered as numeric.
    ///
    /// Kinds outside the universal set are simply not numeric. A flat registry
    /// has no numeric category, so everything is reported as non-numeric.
    pub fn is_numeric(&self, value: &dyn SimpleData) -> bool {
        if !self.is_categorized() {
            self.warn_uncategorized_once();
            return false;
        }
        self.entry_of(value)
            .is_some_and(|e| e.category == Some(Category::Numeric))
    }

    /// The value as `f64` if it is numeric in this registry.
    pub fn as_f64(&self, value: &dyn SimpleData) -> Option<f64> {
        if !self.is_numeric(value) {
            return None;
        }
        let value = unboxed(value);
        self.entry_of(value)
            .and_then(|e| e.numeric_value(value.as_any()))
    }
}

/// Checks whether `value` is numeric under the builtin registry. Integers and
/// floats of every width are numeric; strings, booleans and unregistered kinds
/// are not.
pub fn is_numeric(value: &dyn SimpleData) -> bool {
    TypeRegistry::builtin().is_numeric(value)
}

/// Numeric view of `value` under the builtin registry.
pub fn as_f64(value: &dyn SimpleData) -> Option<f64> {
    TypeRegistry::builtin().as_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::types::UintPtr;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct SimpleComposite {
        _a: i32,
        _b: bool,
    }

    #[test]
    fn test_is_numeric() {
        let good: Vec<Box<dyn SimpleData>> = vec![
            Box::new(0isize),
            Box::new(1i8),
            Box::new(0xffi32),
            Box::new(-44i64),
            Box::new(99usize),
            Box::new(255u8),
            Box::new(11u16),
            Box::new(8245u32),
            Box::new(1231231299u64),
            Box::new(UintPtr(123)),
            Box::new(0.523f32),
            Box::new(-1123.1231f64),
        ];
        let bad: Vec<Box<dyn SimpleData>> = vec![
            Box::new(String::from("asdfasdf")),
            Box::new(true),
            Box::new(SimpleComposite { _a: 1, _b: false }),
            Box::new(()),
            Box::new(HashMap::<String, i32>::new()),
        ];
        for sd in &good {
            assert!(is_numeric(&**sd), "expected numeric: {:?}", sd);
        }
        for sd in &bad {
            assert!(!is_numeric(&**sd), "expected non-numeric: {:?}", sd);
        }
    }

    #[test]
    fn test_boxed_values_classify_by_inner_kind() {
        let int: Box<dyn SimpleData> = Box::new(1i64);
        let text: Box<dyn SimpleData> = Box::new(String::from("1"));
        assert!(is_numeric(&int));
        assert!(!is_numeric(&text));
        assert_eq!(as_f64(&int), Some(1.0));
        assert_eq!(as_f64(&text), None);
    }

    #[test]
    fn test_configured_partition() {
        let config = RegistryConfig::Categorized {
            numeric: vec!["int64".into(), "float64".into()],
            other: vec!["string".into(), "bool".into()],
        };
        let reg = TypeRegistry::from_config(&config).unwrap();
        assert!(reg.is_numeric(&3i64));
        assert!(reg.is_numeric(&3.5f64));
        assert!(!reg.is_numeric(&String::from("x")));
        assert!(!reg.is_numeric(&false));
        // Registered in the builtin set but not in this one.
        assert!(!reg.is_numeric(&3i32));
    }

    #[test]
    fn test_flat_registry_never_classifies_numeric() {
        let reg = TypeRegistry::from_config(&RegistryConfig::Flat {
            types: vec!["int64".into(), "string".into()],
        })
        .unwrap();
        assert!(!reg.is_numeric(&3i64));
        assert!(!reg.is_numeric(&3i64));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(as_f64(&7u32), Some(7.0));
        assert_eq!(as_f64(&-2.5f32), Some(-2.5));
        assert_eq!(as_f64(&true), None);
        assert_eq!(as_f64(&String::from("1")), None);
        assert_eq!(as_f64(&'x'), None);
    }
}
