//! Implementation blocks for configuration types.

/// Loading, saving and defaults for `Configuration`.
pub mod configuration;

/// Defaults for `EngineConfig`.
pub mod engine_config;

/// Display and Error impls for `ConfigurationError`.
pub mod configuration_error;

/// Helpers for `ProtocolVersion`.
pub mod protocol_version;

/// Helpers for `VerifyMode`.
pub mod verify_mode;
