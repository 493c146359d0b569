//! Implementation blocks for common types.

/// `CustomError` constructors and trait impls.
pub mod custom_error;
