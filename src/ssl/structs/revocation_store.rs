use rustls::pki_types::CertificateRevocationListDer;

#[derive(Debug, Clone, Default)]
pub struct RevocationStore {
    pub(crate) crls: Vec<CertificateRevocationListDer<'static>>,
    pub(crate) issuers: Vec<String>,
}
