use std::sync::Arc;
use rsa::RsaPrivateKey;
use crate::ssl::structs::dh_params::DhParams;

/// Each slot is independently nullable so freeing twice is harmless.
#[derive(Debug, Clone, Default)]
pub struct TemporaryKeys {
    pub rsa_512: Option<Arc<RsaPrivateKey>>,
    pub rsa_1024: Option<Arc<RsaPrivateKey>>,
    pub dh_512: Option<Arc<DhParams>>,
    pub dh_1024: Option<Arc<DhParams>>,
}
