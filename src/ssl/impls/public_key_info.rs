use der::Encode;
use spki::SubjectPublicKeyInfoRef;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::structs::public_key_info::PublicKeyInfo;

impl PublicKeyInfo {
    pub fn from_der(spki_der: &[u8]) -> Result<PublicKeyInfo, spki::Error> {
        let spki = SubjectPublicKeyInfoRef::try_from(spki_der)?;
        let parameters = match spki.algorithm.parameters {
            Some(any) if !any.is_null() => Some(any.to_der()?),
            _ => None,
        };
        Ok(PublicKeyInfo {
            algorithm: spki.algorithm.oid,
            parameters,
            subject_public_key: spki.subject_public_key.raw_bytes().to_vec(),
        })
    }

    pub fn slot(&self) -> Option<AlgorithmSlot> {
        AlgorithmSlot::from_oid(&self.algorithm.to_string())
    }

    pub fn missing_parameters(&self) -> bool {
        self.parameters.is_none()
    }

    /// Copies domain parameters only when none are present; returns whether it did.
    pub fn inherit_parameters(&mut self, parameters: &[u8]) -> bool {
        if !self.missing_parameters() {
            return false;
        }
        self.parameters = Some(parameters.to_vec());
        true
    }
}
