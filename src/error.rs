// In: src/error.rs

//! This module defines the single, unified error type for the simpledata library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Only recoverable conditions live here. An out-of-universe value reaching
//! `ensure_simple_data` is a bug in the caller and is raised as a panic instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimpleDataError {
    // =========================================================================
    // === Boundary Errors (bad external input, version skew, typos)
    // =========================================================================
    /// A dtype identifier that names neither a registered kind nor `"empty"`.
    #[error("invalid data type {0:?} for SimpleData")]
    InvalidDtype(String),

    /// The non-fatal form of a validation failure, returned by `check_simple_data`.
    #[error("{value} (kind {kind}) is not a valid SimpleData value")]
    InvalidValue { value: String, kind: &'static str },

    /// A column whose values do not all share one kind.
    #[error("found different data types in column: value {index} is {found}, expected {expected}")]
    MixedColumn {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    // =========================================================================
    // === Registry Construction Errors
    // =========================================================================
    #[error("Malformed type registry: {0}")]
    Registry(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library while reading a registry configuration.
    #[error("Registry configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// An Arrow type with no scalar kind counterpart.
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),
}
