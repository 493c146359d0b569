use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::key_encoding::KeyEncoding;

#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) der: Vec<u8>,
    pub algorithm: AlgorithmSlot,
    pub encoding: KeyEncoding,
    /// DER encoded domain parameters, DSA only.
    pub parameters: Option<Vec<u8>>,
}
