/// DER bytes handed over by the key material collaborator.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub certificate: Vec<u8>,
    pub private_key: Vec<u8>,
}
