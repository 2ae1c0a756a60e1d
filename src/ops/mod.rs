//! The three dispatch operations over a `TypeRegistry`.
//!
//! Each operation is a method on `TypeRegistry` plus a free function bound to
//! the builtin registry. Error handling differs on purpose:
//!
//!   - `is_numeric` never fails.
//!   - `ensure_simple_data` panics: an unregistered kind at that point is a bug.
//!   - `slice_of` returns `Result`: its input comes from outside the process.

pub mod classifier;
pub mod factory;
pub mod validator;

pub use classifier::{as_f64, is_numeric};
pub use factory::slice_of;
pub use validator::{check_simple_data, ensure_column, ensure_simple_data};
