use std::sync::Arc;
use log::info;
use rsa::RsaPrivateKey;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::CertificateDer;
use rustls::server::NoServerSessionStorage;
use rustls::ServerConfig;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::temporary_key_strength::TemporaryKeyStrength;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::context_options::ContextOptions;
use crate::ssl::structs::dh_params::DhParams;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::peer_certificate_verifier::PeerCertificateVerifier;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::protocol_set::ProtocolSet;
use crate::ssl::structs::revocation_store::RevocationStore;
use crate::ssl::structs::session_cache_binding::SessionCacheBinding;
use crate::ssl::structs::temporary_keys::TemporaryKeys;
use crate::ssl::structs::tls_context::TlsContext;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::verify_settings::VerifySettings;

impl TlsContext {
    /// Every protocol outside `protocols` is switched off.
    pub fn new(host_id: HostId, protocols: ProtocolSet, provider: Arc<CryptoProvider>) -> Result<TlsContext, SslError> {
        if protocols.is_empty() {
            return Err(SslError::EmptyProtocolSet(host_id.to_string()));
        }
        Ok(TlsContext {
            host_id,
            options: ContextOptions::disabling(protocols) | ContextOptions::NO_RENEGOTIATION | ContextOptions::SINGLE_DH_USE,
            session_cache: SessionCacheBinding::disabled(),
            verify: VerifySettings::default(),
            verify_locations: None,
            client_ca_list: TrustList::default(),
            verifier: None,
            cipher_suites: None,
            revocation_store: None,
            chain: Vec::new(),
            temporary_keys: TemporaryKeys::default(),
            trace_state: false,
            certificates: [None, None],
            private_keys: [None, None],
            provider,
        })
    }

    pub fn host_id(&self) -> &HostId {
        &self.host_id
    }

    pub fn options(&self) -> ContextOptions {
        self.options
    }

    pub fn enabled_protocols(&self) -> ProtocolSet {
        self.options.enabled_protocols()
    }

    pub fn session_cache(&self) -> &SessionCacheBinding {
        &self.session_cache
    }

    pub fn verify(&self) -> VerifySettings {
        self.verify
    }

    pub fn client_ca_list(&self) -> &TrustList {
        &self.client_ca_list
    }

    pub fn verifier(&self) -> Option<Arc<PeerCertificateVerifier>> {
        self.verifier.clone()
    }

    pub fn has_verify_locations(&self) -> bool {
        self.verify_locations.as_ref().is_some_and(|store| !store.is_empty())
    }

    pub fn cipher_suite_names(&self) -> Option<Vec<String>> {
        self.cipher_suites
            .as_ref()
            .map(|suites| suites.iter().map(|suite| format!("{:?}", suite.suite())).collect())
    }

    pub fn revocation_store(&self) -> Option<&RevocationStore> {
        self.revocation_store.as_deref()
    }

    pub fn chain(&self) -> &[CertificateDer<'static>] {
        &self.chain
    }

    pub fn certificate(&self, slot: AlgorithmSlot) -> Option<&Certificate> {
        self.certificates[slot.index()].as_ref()
    }

    pub fn private_key(&self, slot: AlgorithmSlot) -> Option<&PrivateKey> {
        self.private_keys[slot.index()].as_ref()
    }

    /// Ephemeral RSA callback.
    pub fn temporary_rsa(&self, export: bool, key_length: usize) -> Option<Arc<RsaPrivateKey>> {
        self.temporary_keys.rsa(TemporaryKeyStrength::for_request(export, key_length))
    }

    /// Ephemeral DH callback.
    pub fn temporary_dh(&self, export: bool, key_length: usize) -> Option<Arc<DhParams>> {
        self.temporary_keys.dh(TemporaryKeyStrength::for_request(export, key_length))
    }

    /// State-transition callback; silent unless tracing was requested for the host.
    pub fn trace_state(&self, event: &str) -> bool {
        if self.trace_state {
            info!("[SSL] {}: {}", self.host_id, event);
        }
        self.trace_state
    }

    /// Serving configuration for the RSA slot with the chain, verifier and session storage attached.
    pub fn server_config(&self) -> Result<ServerConfig, SslError> {
        let failure = |reason: String| SslError::ServerConfig { host: self.host_id.to_string(), reason };

        let versions = self.enabled_protocols().rustls_versions();
        if versions.is_empty() {
            return Err(failure(String::from("none of the enabled protocols is TLSv1.2 or TLSv1.3")));
        }

        let mut provider = (*self.provider).clone();
        if let Some(suites) = &self.cipher_suites {
            provider.cipher_suites = suites.clone();
        }

        let builder = ServerConfig::builder_with_provider(Arc::new(provider))
            .with_protocol_versions(&versions)
            .map_err(|e| failure(e.to_string()))?;
        let builder = match &self.verifier {
            Some(verifier) if !self.verify.mode.is_none() => builder.with_client_cert_verifier(verifier.clone()),
            _ => builder.with_no_client_auth(),
        };

        let certificate = self
            .certificate(AlgorithmSlot::Rsa)
            .ok_or_else(|| failure(String::from("no RSA server certificate")))?;
        let key = self
            .private_key(AlgorithmSlot::Rsa)
            .and_then(|key| key.rustls_der())
            .ok_or_else(|| failure(String::from("no usable RSA server private key")))?;

        let mut chain = vec![certificate.der.clone()];
        chain.extend(self.chain.iter().cloned());

        let mut config = builder.with_single_cert(chain, key).map_err(|e| failure(e.to_string()))?;
        if let Some(storage) = self.session_cache.storage() {
            config.session_storage = storage;
        } else {
            config.session_storage = Arc::new(NoServerSessionStorage {});
        }
        Ok(config)
    }
}
