//! Implementation blocks for engine types.

/// Slot indexing and OID mapping.
pub mod algorithm_slot;

/// X.509 decoding and advisory checks.
pub mod certificate;

/// Protocol disabling options.
pub mod context_options;

/// DH parameter sanity checks.
pub mod dh_params;

/// Production collaborator selection.
pub mod engine_collaborators;

/// Engine accessors.
pub mod engine_state;

/// Start and reload sequence.
pub mod engine_state_bootstrap;

/// Forked worker initialization.
pub mod engine_state_child;

/// Idempotent teardown.
pub mod engine_state_teardown;

/// Certificate and key files as key material.
pub mod file_key_material_source;

/// Lock file mutex.
pub mod file_mutex;

/// Per-host defaults, accessors and teardown.
pub mod host_config;

/// The per-host context build.
pub mod host_config_context_builder;

/// Host identifier derivation.
pub mod host_id;

pub mod key_material;

/// Key material lookup by host and slot.
pub mod key_material_table;

/// In-process session storage with expiry.
pub mod memory_session_cache;

pub mod no_mutex;

/// rustls client certificate verification.
pub mod peer_certificate_verifier;

/// Verification flags per mode.
pub mod peer_verify_flags;

/// Private key decoding.
pub mod private_key;

pub mod process_fatal_handler;

/// Bitmask conversions.
pub mod protocol_set;

/// Subject public key info decoding and DSA parameter inheritance.
pub mod public_key_info;

/// CRL loading.
pub mod revocation_store;

/// rustls session storage glue.
pub mod session_cache_adapter;

pub mod session_cache_binding;

/// Error classification.
pub mod ssl_error;

/// DER subject names.
pub mod subject_name;

/// Temporary key generation.
pub mod system_key_generator;

/// Temporary key slots and strength selection.
pub mod temporary_keys;

/// Context accessors, callbacks and `ServerConfig` conversion.
pub mod tls_context;

pub mod trust_list;

/// Sorted, duplicate-free CA name merging.
pub mod trust_list_assembler;

/// Verify mode and depth defaults.
pub mod verify_settings;

/// Version components.
pub mod version_info;
