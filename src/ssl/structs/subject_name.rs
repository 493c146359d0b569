/// DER encoded X.509 `Name`; ordering is by encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectName(pub(crate) Vec<u8>);
