use rustls::pki_types::CertificateDer;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::structs::public_key_info::PublicKeyInfo;

#[derive(Debug, Clone)]
pub struct Certificate {
    pub der: CertificateDer<'static>,
    pub subject: String,
    pub common_names: Vec<String>,
    pub algorithm: AlgorithmSlot,
    pub is_ca: bool,
    pub path_len_constraint: Option<u32>,
    pub server_gated_crypto: bool,
    pub public_key: PublicKeyInfo,
}
