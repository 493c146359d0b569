//! Configuration enumerations.

/// Errors raised while reading or writing the configuration file.
pub mod configuration_error;

/// Mutex collaborator selection.
pub mod mutex_mode;

/// Pass phrase dialog selection.
pub mod pass_phrase_dialog;

/// Protocol versions a host may accept.
pub mod protocol_version;

/// Session cache storage selection.
pub mod session_cache_mode;

/// Client certificate verification modes.
pub mod verify_mode;
