use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostSummary {
    pub id: String,
    pub bind_address: String,
    pub enabled: bool,
    pub protocols: Vec<String>,
    pub verify_mode: Option<String>,
    pub verify_depth: Option<u32>,
    pub client_ca_names: usize,
    pub chain_certificates: usize,
    pub revocation_lists: usize,
    pub certificate_slots: Vec<String>,
    pub session_cache: bool,
}
