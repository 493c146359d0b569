use std::fmt;
use std::sync::Arc;
use log::debug;
use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::server::WebPkiClientVerifier;
use rustls::{CertificateError, DigitallySignedStruct, DistinguishedName, Error, RootCertStore, SignatureScheme};
use x509_parser::prelude::parse_x509_certificate;
use crate::ssl::structs::peer_certificate_verifier::PeerCertificateVerifier;
use crate::ssl::structs::revocation_store::RevocationStore;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::verify_settings::VerifySettings;

impl PeerCertificateVerifier {
    /// Chain validation is only possible when verify locations hold at least one anchor.
    pub fn new(
        settings: VerifySettings,
        trust_list: &TrustList,
        verify_locations: Option<Arc<RootCertStore>>,
        revocation_store: Option<&RevocationStore>,
        provider: Arc<CryptoProvider>,
    ) -> Result<PeerCertificateVerifier, String> {
        let inner = match verify_locations {
            Some(roots) if !roots.is_empty() && !settings.mode.skips_ca_check() => {
                let crls = revocation_store.map(|store| store.crls()).unwrap_or_default();
                let verifier = WebPkiClientVerifier::builder_with_provider(roots, provider.clone())
                    .with_crls(crls)
                    .allow_unauthenticated()
                    .build()
                    .map_err(|e| e.to_string())?;
                Some(verifier)
            }
            _ => None,
        };
        Ok(PeerCertificateVerifier {
            inner,
            root_hints: trust_list.distinguished_names(),
            settings,
            algorithms: provider.signature_verification_algorithms,
        })
    }

    pub fn settings(&self) -> VerifySettings {
        self.settings
    }

    pub fn can_validate_chains(&self) -> bool {
        self.inner.is_some()
    }
}

impl fmt::Debug for PeerCertificateVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerCertificateVerifier")
            .field("settings", &self.settings)
            .field("root_hints", &self.root_hints.len())
            .field("validates_chains", &self.inner.is_some())
            .finish()
    }
}

impl ClientCertVerifier for PeerCertificateVerifier {
    fn offer_client_auth(&self) -> bool {
        !self.settings.mode.is_none()
    }

    fn client_auth_mandatory(&self) -> bool {
        self.settings.mode.is_required()
    }

    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &self.root_hints
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, Error> {
        if intermediates.len() >= self.settings.depth as usize {
            debug!("[SSL] client chain with {} intermediate(s) exceeds verify depth {}", intermediates.len(), self.settings.depth);
            return Err(Error::General(format!(
                "certificate chain too long: {} intermediate(s), verify depth {}",
                intermediates.len(),
                self.settings.depth
            )));
        }
        if self.settings.mode.skips_ca_check() {
            parse_x509_certificate(end_entity)
                .map_err(|_| Error::InvalidCertificate(CertificateError::BadEncoding))?;
            return Ok(ClientCertVerified::assertion());
        }
        match &self.inner {
            Some(inner) => inner.verify_client_cert(end_entity, intermediates, now),
            None => Err(Error::InvalidCertificate(CertificateError::UnknownIssuer)),
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, Error> {
        verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, Error> {
        verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}
