//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the engine, the configuration layer and the binary.
//!
//! # Utilities
//!
//! - Logging setup (fern dispatcher with colored levels)
//! - Log level parsing
//! - Case-blind wildcard matching for certificate common names
//! - Bind address splitting
//!
//! # Data Structures
//!
//! - `CustomError` - Message-only error type used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use vhost_tls::common::common::{setup_logging, wildcard_match};
//!
//! setup_logging(&config)?;
//! assert!(wildcard_match("*.example.com", "www.example.com"));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common utilities.
mod tests;
