use crate::ssl::enums::algorithm_slot::AlgorithmSlot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateAdvisory {
    pub slot: Option<AlgorithmSlot>,
    pub server_gated_crypto: bool,
    pub ca_certificate: bool,
    pub path_length: Option<u32>,
    pub common_name_mismatch: Option<String>,
}
