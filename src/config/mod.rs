//! Configuration management module.
//!
//! This module handles loading, parsing and saving the engine configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level**: Verbosity of the fern dispatcher
//! - **engine**: Process-wide settings (crypto device, session cache, mutex, seeding)
//! - **virtual_hosts**: One entry per virtual host with its certificate, key,
//!   trust and revocation settings
//!
//! # Example
//!
//! ```rust,ignore
//! use vhost_tls::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (verify modes, protocols, cache modes).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
