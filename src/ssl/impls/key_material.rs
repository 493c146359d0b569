use std::fmt;
use crate::ssl::structs::key_material::KeyMaterial;

impl KeyMaterial {
    pub fn new(certificate: Vec<u8>, private_key: Vec<u8>) -> KeyMaterial {
        KeyMaterial { certificate, private_key }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("certificate", &format_args!("{} bytes", self.certificate.len()))
            .field("private_key", &"<redacted>")
            .finish()
    }
}
