//! Engine data structures.

/// Conflicting bindings found by the consistency checker.
pub mod binding_collision;

/// Advisory findings for an imported certificate.
pub mod certificate_advisory;

/// Decoded X.509 server certificate.
pub mod certificate;

/// Result of the cross-server consistency checks.
pub mod consistency_report;

/// Context option flags.
pub mod context_options;

/// Temporary Diffie-Hellman parameters.
pub mod dh_params;

/// ASN.1 shapes of DSA parameters and traditional DSA keys.
pub mod dsa_asn1;

/// Collaborators handed to the bootstrap.
pub mod engine_collaborators;

/// Process-wide engine state.
pub mod engine_state;

/// Key material read from certificate and key files.
pub mod file_key_material_source;

/// Lock-file based mutex.
pub mod file_mutex;

/// Runtime per-host state.
pub mod host_config;

/// Stable host identifier.
pub mod host_id;

/// Serializable summary of a configured host.
pub mod host_summary;

/// Decrypted certificate and key bytes.
pub mod key_material;

/// Key material keyed by host and slot.
pub mod key_material_table;

/// In-process session cache storage.
pub mod memory_session_cache;

/// Mutex that does nothing.
pub mod no_mutex;

/// Client certificate verifier bound to a host context.
pub mod peer_certificate_verifier;

/// Peer verification flags.
pub mod peer_verify_flags;

/// Decoded private key.
pub mod private_key;

/// Fatal handler that terminates the process.
pub mod process_fatal_handler;

/// Accepted protocol bitmask.
pub mod protocol_set;

/// Owned subject public key info.
pub mod public_key_info;

/// Certificate revocation lists.
pub mod revocation_store;

/// rustls session storage routed through the session cache callbacks.
pub mod session_cache_adapter;

/// Session cache binding of a context.
pub mod session_cache_binding;

/// DER encoded CA subject name.
pub mod subject_name;

/// Temporary key generator backed by `rsa` and `num-bigint-dig`.
pub mod system_key_generator;

/// Temporary RSA keys and DH parameters.
pub mod temporary_keys;

/// Immutable per-host TLS context.
pub mod tls_context;

/// Frozen list of CA subject names.
pub mod trust_list;

/// Sorted, duplicate-free CA name collector.
pub mod trust_list_assembler;

/// Client verification settings of a context.
pub mod verify_settings;

/// Product, interface and library version components.
pub mod version_info;
