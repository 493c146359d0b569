//! Collaborator seams consumed by the engine.

/// Mutex/lock collaborator.
pub mod engine_mutex;

/// Temporary key generation.
pub mod ephemeral_key_generator;

/// Process termination on fatal errors.
pub mod fatal_handler;

/// Decrypted certificate/key lookup.
pub mod key_material_source;

/// Session cache storage callbacks.
pub mod session_cache;
