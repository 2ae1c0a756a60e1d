//! Allocation of empty, typed column storage from a dtype identifier.
//!
//! This is the boundary-facing operation: the identifier usually comes from
//! persisted column metadata or user input, so an unknown name is an ordinary
//! error rather than a fault.

use crate::error::SimpleDataError;
use crate::registry::TypeRegistry;
use crate::storage::ColumnStorage;
use crate::types::EMPTY_DTYPE;

impl TypeRegistry {
    /// Allocates a fresh, empty column for `dtype`.
    ///
    /// `"empty"` yields an untyped column over boxed `SimpleData`. Every call
    /// allocates a new, independently owned container.
    pub fn slice_of(&self, dtype: &str) -> Result<ColumnStorage, SimpleDataError> {
        if dtype == EMPTY_DTYPE {
            log::debug!("allocating untyped column storage");
            return Ok(ColumnStorage::Empty(Vec::new()));
        }
        match self.lookup(dtype) {
            Some(entry) => {
                log::debug!(
                    "allocating column storage for {} ({})",
                    entry.name(),
                    entry.rust_type()
                );
                Ok(entry.new_storage())
            }
            None => {
                log::warn!("rejected dtype {:?}: not a registered SimpleData kind", dtype);
                Err(SimpleDataError::InvalidDtype(dtype.to_string()))
            }
        }
    }
}

/// Allocates empty column storage for `dtype` under the builtin registry.
pub fn slice_of(dtype: &str) -> Result<ColumnStorage, SimpleDataError> {
    TypeRegistry::builtin().slice_of(dtype)
}
