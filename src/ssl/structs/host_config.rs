use std::sync::Arc;
use crate::config::enums::verify_mode::VerifyMode;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::protocol_set::ProtocolSet;
use crate::ssl::structs::revocation_store::RevocationStore;
use crate::ssl::structs::tls_context::TlsContext;

/// Runtime state of one virtual host. Slots are indexed by `AlgorithmSlot`.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub id: HostId,
    pub server_name: String,
    pub bind_address: String,
    pub source: Option<String>,
    pub enabled: bool,
    pub protocols: ProtocolSet,
    pub cipher_suite: Option<String>,
    pub verify_mode: Option<VerifyMode>,
    pub verify_depth: Option<u32>,
    pub certificate_files: Vec<String>,
    pub key_files: Vec<String>,
    pub ca_certificate_file: Option<String>,
    pub ca_certificate_path: Option<String>,
    pub ca_revocation_file: Option<String>,
    pub ca_revocation_path: Option<String>,
    pub certificate_chain_file: Option<String>,
    pub session_cache_timeout: u64,
    pub trace_state: bool,
    pub context: Option<Arc<TlsContext>>,
    pub certificates: [Option<Certificate>; 2],
    pub private_keys: [Option<PrivateKey>; 2],
    pub revocation_store: Option<Arc<RevocationStore>>,
}
