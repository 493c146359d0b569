use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::{load_certificates, load_private_key};
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::file_key_material_source::FileKeyMaterialSource;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::traits::key_material_source::KeyMaterialSource;

impl KeyMaterialSource for FileKeyMaterialSource {
    /// The n-th key file belongs to the n-th certificate file; without one the certificate file holds the key too.
    fn resolve(&self, host: &HostConfig, slot: AlgorithmSlot) -> Result<Option<KeyMaterial>, SslError> {
        let failure = |reason: String| SslError::KeyMaterial { host: host.id.to_string(), reason };
        for (index, certificate_file) in host.certificate_files.iter().enumerate() {
            let certificates = load_certificates(certificate_file).map_err(failure)?;
            let Some(leaf) = certificates.into_iter().next() else {
                return Err(failure(format!("{}: no certificate found", certificate_file)));
            };
            let certificate = Certificate::from_der(&leaf).map_err(|e| failure(format!("{}: {}", certificate_file, e)))?;
            if certificate.algorithm != slot {
                continue;
            }
            let key_file = host.key_files.get(index).unwrap_or(certificate_file);
            let private_key = load_private_key(key_file).map_err(failure)?;
            return Ok(Some(KeyMaterial::new(leaf.to_vec(), private_key)));
        }
        Ok(None)
    }
}
