use std::sync::Arc;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::CertificateDer;
use rustls::{RootCertStore, SupportedCipherSuite};
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::context_options::ContextOptions;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::peer_certificate_verifier::PeerCertificateVerifier;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::revocation_store::RevocationStore;
use crate::ssl::structs::session_cache_binding::SessionCacheBinding;
use crate::ssl::structs::temporary_keys::TemporaryKeys;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::verify_settings::VerifySettings;

/// Built once per enabled host and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct TlsContext {
    pub(crate) host_id: HostId,
    pub(crate) options: ContextOptions,
    pub(crate) session_cache: SessionCacheBinding,
    pub(crate) verify: VerifySettings,
    pub(crate) verify_locations: Option<Arc<RootCertStore>>,
    pub(crate) client_ca_list: TrustList,
    pub(crate) verifier: Option<Arc<PeerCertificateVerifier>>,
    pub(crate) cipher_suites: Option<Vec<SupportedCipherSuite>>,
    pub(crate) revocation_store: Option<Arc<RevocationStore>>,
    pub(crate) chain: Vec<CertificateDer<'static>>,
    pub(crate) temporary_keys: TemporaryKeys,
    pub(crate) trace_state: bool,
    pub(crate) certificates: [Option<Certificate>; 2],
    pub(crate) private_keys: [Option<PrivateKey>; 2],
    pub(crate) provider: Arc<CryptoProvider>,
}
