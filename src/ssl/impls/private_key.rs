use std::fmt;
use der::{Decode, Encode};
use rsa::pkcs8::PrivateKeyInfo;
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs1KeyDer, PrivatePkcs8KeyDer};
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::key_encoding::KeyEncoding;
use crate::ssl::structs::dsa_asn1::{DsaTraditionalKey, DssParameters};
use crate::ssl::structs::private_key::PrivateKey;

impl PrivateKey {
    /// Accepts PKCS#8 (RSA or DSA), PKCS#1 RSA and traditional DSA encodings.
    pub fn from_der(der: &[u8]) -> Result<PrivateKey, String> {
        if let Ok(info) = PrivateKeyInfo::try_from(der) {
            let oid = info.algorithm.oid.to_string();
            let algorithm = AlgorithmSlot::from_oid(&oid)
                .ok_or_else(|| format!("unsupported private key algorithm {}", oid))?;
            let parameters = match info.algorithm.parameters {
                Some(any) if !any.is_null() => Some(any.to_der().map_err(|e| e.to_string())?),
                _ => None,
            };
            return Ok(PrivateKey {
                der: der.to_vec(),
                algorithm,
                encoding: KeyEncoding::Pkcs8,
                parameters,
            });
        }

        if rsa::pkcs1::RsaPrivateKey::from_der(der).is_ok() {
            return Ok(PrivateKey {
                der: der.to_vec(),
                algorithm: AlgorithmSlot::Rsa,
                encoding: KeyEncoding::Pkcs1,
                parameters: None,
            });
        }

        let traditional = DsaTraditionalKey::from_der(der)
            .map_err(|e| format!("not a PKCS#8, PKCS#1 or DSA private key: {}", e))?;
        let parameters = DssParameters {
            p: traditional.p,
            q: traditional.q,
            g: traditional.g,
        }
        .to_der()
        .map_err(|e| e.to_string())?;
        Ok(PrivateKey {
            der: der.to_vec(),
            algorithm: AlgorithmSlot::Dsa,
            encoding: KeyEncoding::TraditionalDsa,
            parameters: Some(parameters),
        })
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// rustls only loads PKCS#8 and PKCS#1 keys.
    pub fn rustls_der(&self) -> Option<PrivateKeyDer<'static>> {
        match self.encoding {
            KeyEncoding::Pkcs8 => Some(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(self.der.clone()))),
            KeyEncoding::Pkcs1 => Some(PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(self.der.clone()))),
            KeyEncoding::TraditionalDsa => None,
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("encoding", &self.encoding)
            .field("parameters", &self.parameters.as_ref().map(|p| p.len()))
            .finish_non_exhaustive()
    }
}
