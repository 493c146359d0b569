use der::asn1::UintRef;
use der::Sequence;

/// `Dss-Parms ::= SEQUENCE { p INTEGER, q INTEGER, g INTEGER }`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct DssParameters<'a> {
    pub p: UintRef<'a>,
    pub q: UintRef<'a>,
    pub g: UintRef<'a>,
}

/// OpenSSL's traditional `DSA PRIVATE KEY` layout.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct DsaTraditionalKey<'a> {
    pub version: u8,
    pub p: UintRef<'a>,
    pub q: UintRef<'a>,
    pub g: UintRef<'a>,
    pub public_key: UintRef<'a>,
    pub private_key: UintRef<'a>,
}
