use std::fmt;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;

pub(crate) const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub(crate) const OID_DSA: &str = "1.2.840.10040.4.1";

impl AlgorithmSlot {
    pub const ALL: [AlgorithmSlot; 2] = [AlgorithmSlot::Rsa, AlgorithmSlot::Dsa];

    pub fn index(self) -> usize {
        match self {
            AlgorithmSlot::Rsa => 0,
            AlgorithmSlot::Dsa => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmSlot::Rsa => "RSA",
            AlgorithmSlot::Dsa => "DSA",
        }
    }

    /// Maps a public key algorithm OID (dotted form) to its slot.
    pub fn from_oid(oid: &str) -> Option<AlgorithmSlot> {
        match oid {
            OID_RSA_ENCRYPTION => Some(AlgorithmSlot::Rsa),
            OID_DSA => Some(AlgorithmSlot::Dsa),
            _ => None,
        }
    }
}

impl fmt::Display for AlgorithmSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
