use std::sync::Arc;
use rustls::crypto::WebPkiSupportedAlgorithms;
use rustls::server::danger::ClientCertVerifier;
use rustls::DistinguishedName;
use crate::ssl::structs::verify_settings::VerifySettings;

pub struct PeerCertificateVerifier {
    pub(crate) inner: Option<Arc<dyn ClientCertVerifier>>,
    pub(crate) root_hints: Vec<DistinguishedName>,
    pub(crate) settings: VerifySettings,
    pub(crate) algorithms: WebPkiSupportedAlgorithms,
}
