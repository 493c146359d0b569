use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::{load_chain, load_verify_locations, resolve_cipher_suites};
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_advisory::CertificateAdvisory;
use crate::ssl::structs::engine_state::EngineState;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::peer_certificate_verifier::PeerCertificateVerifier;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::revocation_store::RevocationStore;
use crate::ssl::structs::session_cache_binding::SessionCacheBinding;
use crate::ssl::structs::tls_context::TlsContext;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::verify_settings::VerifySettings;

impl HostConfig {
    /// Builds this host's context. Nothing is stored on the host unless every step succeeds.
    pub fn configure(&mut self, state: &EngineState) -> Result<Vec<CertificateAdvisory>, SslError> {
        let host = self.id.to_string();

        if self.certificate_files.is_empty() {
            return Err(SslError::MissingCertificatePath(host));
        }
        if self.has_certificates() {
            return Err(SslError::IllegalReinitialization(host));
        }

        info!("[SSL] {}: Creating new SSL context (protocols: {})", self.id, self.protocols.names().join(", "));
        let mut context = TlsContext::new(self.id.clone(), self.protocols, state.provider.clone())?;

        context.session_cache = match (&state.session_cache_mode, &state.session_cache) {
            (SessionCacheMode::memory, Some(cache)) => {
                SessionCacheBinding::server(cache.clone(), Duration::from_secs(self.session_cache_timeout))
            }
            _ => SessionCacheBinding::disabled(),
        };

        context.verify = VerifySettings::new(self.verify_mode, self.verify_depth);
        if self.ca_certificate_file.is_some() || self.ca_certificate_path.is_some() {
            debug!("[SSL] {}: Configuring client authentication", self.id);
            let locations = load_verify_locations(self.ca_certificate_file.as_deref(), self.ca_certificate_path.as_deref())
                .map_err(|reason| SslError::VerifyLocations { host: host.clone(), reason })?;
            context.verify_locations = Some(Arc::new(locations));
            context.client_ca_list = TrustList::assemble(self.ca_certificate_file.as_deref(), self.ca_certificate_path.as_deref())
                .map_err(|reason| SslError::CaListLoad { host: host.clone(), reason })?;
        }
        if context.verify.mode.is_required() && context.client_ca_list.is_empty() {
            warn!("[SSL] {}: Oops, you want to request client authentication, but no CAs are known for verification!?  [Hint: ca_certificate_*]", self.id);
        }

        if let Some(cipher_suite) = self.cipher_suite.as_deref().filter(|suite| !suite.trim().is_empty()) {
            debug!("[SSL] {}: Configuring permitted SSL ciphers [{}]", self.id, cipher_suite);
            let suites = resolve_cipher_suites(cipher_suite, &state.provider)
                .map_err(|reason| SslError::CipherSuite { host: host.clone(), reason })?;
            context.cipher_suites = Some(suites);
        }

        let revocation_store = if self.ca_revocation_file.is_some() || self.ca_revocation_path.is_some() {
            debug!("[SSL] {}: Configuring certificate revocation facility", self.id);
            let store = RevocationStore::load(self.ca_revocation_file.as_deref(), self.ca_revocation_path.as_deref())
                .map_err(|reason| SslError::RevocationStore { host: host.clone(), reason })?;
            Some(Arc::new(store))
        } else {
            None
        };
        context.revocation_store = revocation_store.clone();

        if self.certificate_chain_file.is_some() {
            let chain = load_chain(self).map_err(|reason| SslError::CertificateChain { host: host.clone(), reason })?;
            info!(
                "[SSL] {}: Configuring server certificate chain ({} CA certificate{})",
                self.id,
                chain.len(),
                if chain.len() == 1 { "" } else { "s" }
            );
            context.chain = chain;
        }

        if !context.verify.mode.is_none() {
            let verifier = PeerCertificateVerifier::new(
                context.verify,
                &context.client_ca_list,
                context.verify_locations.clone(),
                context.revocation_store.as_deref(),
                state.provider.clone(),
            )
            .map_err(|reason| SslError::VerifyLocations { host: host.clone(), reason })?;
            context.verifier = Some(Arc::new(verifier));
        }
        context.temporary_keys = state.temporary_keys.clone();
        context.trace_state = self.trace_state;

        let mut certificates: [Option<Certificate>; 2] = [None, None];
        for slot in AlgorithmSlot::ALL {
            let Some(der) = state.key_material.certificate(&self.id, slot) else {
                continue;
            };
            let certificate = Certificate::from_der(der).map_err(|reason| SslError::CertificateDecode {
                host: host.clone(),
                slot,
                reason,
            })?;
            if !slot.matches_certificate(&certificate) {
                return Err(SslError::AlgorithmMismatch { host, slot, found: certificate.algorithm });
            }
            debug!("[SSL] {}: {} server certificate imported", self.id, slot);
            certificates[slot.index()] = Some(certificate);
        }
        if certificates.iter().all(Option::is_none) {
            return Err(SslError::NoCertificate(host));
        }

        let advisories: Vec<CertificateAdvisory> = certificates
            .iter()
            .flatten()
            .map(|certificate| certificate.check_public_cert(&self.id, &self.server_name))
            .collect();

        let mut private_keys: [Option<PrivateKey>; 2] = [None, None];
        for slot in AlgorithmSlot::ALL {
            let Some(der) = state.key_material.private_key(&self.id, slot) else {
                continue;
            };
            let key = PrivateKey::from_der(der).map_err(|reason| SslError::PrivateKeyDecode {
                host: host.clone(),
                slot,
                reason,
            })?;
            if key.algorithm != slot {
                return Err(SslError::AlgorithmMismatch { host, slot, found: key.algorithm });
            }
            debug!("[SSL] {}: {} server private key imported", self.id, slot);
            private_keys[slot.index()] = Some(key);
        }
        if private_keys.iter().all(Option::is_none) {
            return Err(SslError::NoPrivateKey(host));
        }

        let dsa = AlgorithmSlot::Dsa.index();
        if let (Some(certificate), Some(key)) = (certificates[dsa].as_mut(), private_keys[dsa].as_ref()) {
            if let Some(parameters) = key.parameters.as_deref() {
                if certificate.public_key.inherit_parameters(parameters) {
                    debug!("[SSL] {}: copied DSA parameters from private key to certificate", self.id);
                }
            }
        }

        context.certificates = certificates.clone();
        context.private_keys = private_keys.clone();
        self.certificates = certificates;
        self.private_keys = private_keys;
        self.revocation_store = revocation_store;
        self.context = Some(Arc::new(context));
        Ok(advisories)
    }
}
