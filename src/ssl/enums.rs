//! Engine enumerations.

/// Certificate/key algorithm slots.
pub mod algorithm_slot;

/// Classification of engine errors.
pub mod error_severity;

/// Encodings a decoded private key may arrive in.
pub mod key_encoding;

/// Engine error type.
pub mod ssl_error;

/// Strengths of the temporary key material.
pub mod temporary_key_strength;
