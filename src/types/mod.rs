//! This module defines the closed set of scalar kinds a dataframe column may hold.
//!
//! It includes the canonical `ScalarType` tag enum, the open `SimpleData`
//! supertype used to present arbitrary values to the registry, and the `Scalar`
//! trait that binds each admissible Rust element type to its tag.

pub mod scalar_type;
pub mod simple_data;

// Re-export the main type(s) for easier access.
pub use scalar_type::{Category, ScalarType, EMPTY_DTYPE};
pub use simple_data::{unboxed, Scalar, SimpleData, UintPtr};
