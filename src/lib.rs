//! # vhost-tls
//!
//! Per-virtual-host TLS context bootstrap for multi-tenant servers.
//!
//! ## Overview
//!
//! Given a set of virtual hosts, each with its own certificates, private keys,
//! trust and revocation settings, vhost-tls builds one immutable TLS context
//! per enabled host at process start and again on every configuration reload.
//! Misconfiguration is fatal: a host never runs with half-built security state.
//!
//! ## Features
//!
//! - **Dual key slots**: RSA and DSA certificate/key pairs per host
//! - **Trust lists**: sorted, duplicate-free client CA lists from bundle files and directories
//! - **Revocation**: CRL files and directories, enforced during client verification
//! - **Temporary keys**: 512/1024-bit RSA keys and DH parameters shared by all hosts
//! - **Consistency audit**: port convention and binding collision warnings
//! - **rustls**: every context converts into a `rustls::ServerConfig`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vhost_tls::config::structs::configuration::Configuration;
//! use vhost_tls::ssl::structs::engine_collaborators::EngineCollaborators;
//! use vhost_tls::ssl::structs::engine_state::EngineState;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let collaborators = EngineCollaborators::from_config(&config.engine);
//! let (mut state, mut hosts) = EngineState::init_module(&config, &collaborators)?;
//! state.kill_module(&mut hosts);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, wildcard matching and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - The TLS engine: bootstrap, per-host contexts, trust lists, teardown
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup, bind address parsing, wildcard matching and the
/// `CustomError` type used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and saving the engine and virtual host settings
/// from TOML files.
pub mod config;

/// Per-virtual-host TLS engine.
///
/// Bootstraps the process-wide engine state, builds one TLS context per
/// enabled host, audits bindings and tears everything down again.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
