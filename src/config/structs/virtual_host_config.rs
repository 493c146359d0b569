use serde::{Deserialize, Serialize};
use crate::config::enums::protocol_version::ProtocolVersion;
use crate::config::enums::verify_mode::VerifyMode;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VirtualHostConfig {
    pub server_name: String,
    pub bind_address: String,
    pub enabled: Option<bool>,
    pub source: Option<String>,
    pub protocols: Option<Vec<ProtocolVersion>>,
    pub cipher_suite: Option<String>,
    pub verify_client: Option<VerifyMode>,
    pub verify_depth: Option<u32>,
    #[serde(default)]
    pub certificate_files: Vec<String>,
    #[serde(default)]
    pub key_files: Vec<String>,
    pub ca_certificate_file: Option<String>,
    pub ca_certificate_path: Option<String>,
    pub ca_revocation_file: Option<String>,
    pub ca_revocation_path: Option<String>,
    pub certificate_chain_file: Option<String>,
    pub session_cache_timeout: Option<u64>,
    pub trace_state: Option<bool>,
}
