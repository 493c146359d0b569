//! Per-virtual-host TLS engine.
//!
//! Builds one immutable TLS context per enabled virtual host, once at start
//! and again on every reload. A build either completes for every enabled
//! host or ends in the fatal handler; no host is left half configured.
//!
//! # Bootstrap order
//!
//! 1. Normalize engine defaults and derive per-host defaults
//! 2. Initialize the crypto library and seed the generator
//! 3. Collect decrypted key material for every enabled host
//! 4. Generate temporary RSA keys and DH parameters (512/1024 bits)
//! 5. Activate the crypto device, the mutex and the session cache
//! 6. Build each enabled host's context in declaration order
//! 7. Audit ports and bindings across hosts
//!
//! # Example
//!
//! ```rust,ignore
//! use vhost_tls::ssl::structs::engine_collaborators::EngineCollaborators;
//! use vhost_tls::ssl::structs::engine_state::EngineState;
//!
//! let collaborators = EngineCollaborators::from_config(&config.engine);
//! let (mut state, mut hosts) = EngineState::init_module(&config, &collaborators)?;
//! let server_config = hosts[0].context.as_ref().unwrap().server_config()?;
//! state.kill_module(&mut hosts);
//! ```

/// Enumerations (slots, severities, errors).
pub mod enums;

/// Implementation blocks.
pub mod impls;

/// Free functions: loaders, cipher and provider resolution, consistency audit.
pub mod ssl;

/// Data structures.
pub mod structs;

/// Collaborator traits.
pub mod traits;

/// Unit tests for the engine.
mod tests;
