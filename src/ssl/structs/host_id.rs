/// `server_name:port`, used to key decrypted key material.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(pub(crate) String);
