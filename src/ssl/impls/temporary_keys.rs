use std::sync::Arc;
use log::info;
use rand::rngs::StdRng;
use rsa::RsaPrivateKey;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::temporary_key_strength::TemporaryKeyStrength;
use crate::ssl::structs::dh_params::DhParams;
use crate::ssl::structs::temporary_keys::TemporaryKeys;
use crate::ssl::traits::ephemeral_key_generator::EphemeralKeyGenerator;

impl TemporaryKeyStrength {
    pub fn bits(&self) -> usize {
        match self {
            TemporaryKeyStrength::Export512 => 512,
            TemporaryKeyStrength::Full1024 => 1024,
        }
    }

    /// Export requests for 512-bit material get the weak set, everything else the strong one.
    pub fn for_request(export: bool, key_length: usize) -> TemporaryKeyStrength {
        if export && key_length == 512 {
            TemporaryKeyStrength::Export512
        } else {
            TemporaryKeyStrength::Full1024
        }
    }
}

impl TemporaryKeys {
    /// Any failure aborts the whole set; the keys are never partially present.
    pub fn generate(generator: &dyn EphemeralKeyGenerator, rng: &mut StdRng) -> Result<TemporaryKeys, SslError> {
        info!("[TMPKEY] Generating temporary RSA private keys (512/1024 bits)");
        let rsa_512 = generator.generate_rsa(rng, TemporaryKeyStrength::Export512.bits())?;
        let rsa_1024 = generator.generate_rsa(rng, TemporaryKeyStrength::Full1024.bits())?;

        info!("[TMPKEY] Generating temporary DH parameters (512/1024 bits)");
        let dh_512 = generator.generate_dh(rng, TemporaryKeyStrength::Export512.bits())?;
        let dh_1024 = generator.generate_dh(rng, TemporaryKeyStrength::Full1024.bits())?;

        Ok(TemporaryKeys {
            rsa_512: Some(Arc::new(rsa_512)),
            rsa_1024: Some(Arc::new(rsa_1024)),
            dh_512: Some(Arc::new(dh_512)),
            dh_1024: Some(Arc::new(dh_1024)),
        })
    }

    pub fn rsa(&self, strength: TemporaryKeyStrength) -> Option<Arc<RsaPrivateKey>> {
        match strength {
            TemporaryKeyStrength::Export512 => self.rsa_512.clone(),
            TemporaryKeyStrength::Full1024 => self.rsa_1024.clone(),
        }
    }

    pub fn dh(&self, strength: TemporaryKeyStrength) -> Option<Arc<DhParams>> {
        match strength {
            TemporaryKeyStrength::Export512 => self.dh_512.clone(),
            TemporaryKeyStrength::Full1024 => self.dh_1024.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.rsa_512.is_some() && self.rsa_1024.is_some() && self.dh_512.is_some() && self.dh_1024.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.rsa_512.is_none() && self.rsa_1024.is_none() && self.dh_512.is_none() && self.dh_1024.is_none()
    }

    pub fn free(&mut self) {
        self.rsa_512 = None;
        self.rsa_1024 = None;
        self.dh_512 = None;
        self.dh_1024 = None;
    }
}
