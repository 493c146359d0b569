//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Process-wide engine settings.
pub mod engine_config;

/// Per virtual host TLS settings.
pub mod virtual_host_config;
