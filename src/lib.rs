//! This file is the root of the `simpledata` crate.
//!
//! The crate holds the closed set of scalar kinds a dataframe column may store
//! ("SimpleData") and the three operations over it:
//! 1.  `is_numeric`: classify a value as numeric or not. Never fails.
//! 2.  `ensure_simple_data`: assert a value's kind is registered. Panics otherwise.
//! 3.  `slice_of`: allocate empty typed column storage from a dtype name.
//!     Unknown names are a recoverable `SimpleDataError::InvalidDtype`.
//!
//! The free functions use the builtin registry; `TypeRegistry::from_config`
//! builds a restricted registry exposing the same operations as methods.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod observability;
pub mod ops;
pub mod registry;
pub mod storage;
pub mod types;

//==================================================================================
// 2. Public API
//==================================================================================
pub use config::RegistryConfig;
pub use error::SimpleDataError;
pub use ops::{as_f64, check_simple_data, ensure_column, ensure_simple_data, is_numeric, slice_of};
pub use registry::{RegistryEntry, TypeRegistry};
pub use storage::ColumnStorage;
pub use types::{Category, Scalar, ScalarType, SimpleData, UintPtr, EMPTY_DTYPE};
