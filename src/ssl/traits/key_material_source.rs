use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::key_material::KeyMaterial;

/// Hands back decrypted certificate and key bytes for one host and slot.
pub trait KeyMaterialSource: Send + Sync {
    fn resolve(&self, host: &HostConfig, slot: AlgorithmSlot) -> Result<Option<KeyMaterial>, SslError>;
}
