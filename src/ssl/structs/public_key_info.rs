use spki::ObjectIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub algorithm: ObjectIdentifier,
    /// DER encoded algorithm parameters; `None` when absent or NULL.
    pub parameters: Option<Vec<u8>>,
    pub subject_public_key: Vec<u8>,
}
