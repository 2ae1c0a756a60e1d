//! Membership checks against the universal set.
//!
//! `ensure_simple_data` guards code paths that assume every value has already
//! been vetted upstream. A failure there means another part of the engine let
//! an unregistered kind through, so it aborts instead of returning an error.

use crate::error::SimpleDataError;
use crate::registry::TypeRegistry;
use crate::types::{unboxed, ScalarType, SimpleData};

impl TypeRegistry {
    /// Returns the value's kind, or `InvalidValue` if it is not registered.
    pub fn check_simple_data(&self, value: &dyn SimpleData) -> Result<ScalarType, SimpleDataError> {
        let value = unboxed(value);
        self.kind_of(value).ok_or_else(|| SimpleDataError::InvalidValue {
            value: format!("{:?}", value),
            kind: value.type_name(),
        })
    }

    /// Asserts that the value's kind is registered.
    ///
    /// # Panics
    /// If the value's concrete kind is outside the universal set. The message
    /// names the value and its Rust type.
    pub fn ensure_simple_data(&self, value: &dyn SimpleData) {
        if let Err(err) = self.check_simple_data(value) {
            log::error!("{}", err);
            panic!("{}", err);
        }
    }

    /// Asserts every value is registered, then checks the column is homogeneous.
    ///
    /// Mixed kinds are a recoverable error; unregistered kinds panic as in
    /// `ensure_simple_data`. Returns the column kind, `None` if `values` is empty.
    pub fn ensure_column(
        &self,
        values: &[Box<dyn SimpleData>],
    ) -> Result<Option<ScalarType>, SimpleDataError> {
        let mut expected: Option<ScalarType> = None;
        for (index, value) in values.iter().enumerate() {
            let value: &dyn SimpleData = &**value;
            self.ensure_simple_data(value);
            let kind = self.kind_of(value);
            match (expected, kind) {
                (None, found) => expected = found,
                (Some(e), Some(found)) if e != found => {
                    return Err(SimpleDataError::MixedColumn {
                        index,
                        expected: e.name(),
                        found: found.name(),
                    });
                }
                _ => {}
            }
        }
        Ok(expected)
    }
}

/// Non-fatal membership check under the builtin registry.
pub fn check_simple_data(value: &dyn SimpleData) -> Result<ScalarType, SimpleDataError> {
    TypeRegistry::builtin().check_simple_data(value)
}

/// Fatal membership check under the builtin registry. See
/// [`TypeRegistry::ensure_simple_data`].
pub fn ensure_simple_data(value: &dyn SimpleData) {
    TypeRegistry::builtin().ensure_simple_data(value)
}

/// Column consistency check under the builtin registry.
pub fn ensure_column(values: &[Box<dyn SimpleData>]) -> Result<Option<ScalarType>, SimpleDataError> {
    TypeRegistry::builtin().ensure_column(values)
}
