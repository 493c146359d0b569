use log::{info, warn};
use rustls::pki_types::CertificateDer;
use x509_parser::prelude::{parse_x509_certificate, X509Certificate};
use crate::common::common::wildcard_match;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_advisory::CertificateAdvisory;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::public_key_info::PublicKeyInfo;

const OID_NETSCAPE_SGC: &str = "2.16.840.1.113730.4.1";
const OID_MICROSOFT_SGC: &str = "1.3.6.1.4.1.311.10.3.3";

impl Certificate {
    pub fn from_der(der: &[u8]) -> Result<Certificate, String> {
        let (_, parsed) = parse_x509_certificate(der).map_err(|e| e.to_string())?;
        let public_key = PublicKeyInfo::from_der(parsed.public_key().raw).map_err(|e| e.to_string())?;
        let algorithm = public_key
            .slot()
            .ok_or_else(|| format!("unsupported public key algorithm {}", public_key.algorithm))?;
        let (is_ca, path_len_constraint) = match parsed.basic_constraints() {
            Ok(Some(constraints)) => (constraints.value.ca, constraints.value.path_len_constraint),
            Ok(None) => (false, None),
            Err(e) => return Err(e.to_string()),
        };
        Ok(Certificate {
            der: CertificateDer::from(der.to_vec()),
            subject: parsed.subject().to_string(),
            common_names: Self::common_names(&parsed),
            algorithm,
            is_ca,
            path_len_constraint,
            server_gated_crypto: Self::is_sgc(&parsed),
            public_key,
        })
    }

    fn common_names(parsed: &X509Certificate<'_>) -> Vec<String> {
        parsed
            .subject()
            .iter_common_name()
            .filter_map(|cn| cn.as_str().ok())
            .map(|cn| cn.to_string())
            .collect()
    }

    fn is_sgc(parsed: &X509Certificate<'_>) -> bool {
        match parsed.extended_key_usage() {
            Ok(Some(usage)) => usage
                .value
                .other
                .iter()
                .map(|oid| oid.to_id_string())
                .any(|oid| oid == OID_NETSCAPE_SGC || oid == OID_MICROSOFT_SGC),
            _ => false,
        }
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_names.first().map(|cn| cn.as_str())
    }

    /// Advisory checks; they log and never fail.
    pub fn check_public_cert(&self, host: &HostId, server_name: &str) -> CertificateAdvisory {
        let slot = self.algorithm;
        let mut advisory = CertificateAdvisory { slot: Some(slot), ..Default::default() };

        if self.server_gated_crypto {
            warn!("[SSL] {}: {} server certificate enables Server Gated Cryptography (SGC)", host, slot);
            advisory.server_gated_crypto = true;
        }

        if self.is_ca {
            warn!("[SSL] {}: {} server certificate is a CA certificate (BasicConstraints: CA == TRUE !?)", host, slot);
            advisory.ca_certificate = true;
        }

        if let Some(path_length) = self.path_len_constraint.filter(|length| *length > 0) {
            warn!("[SSL] {}: {} server certificate is not a leaf certificate (BasicConstraints: pathlen == {} > 0 !?)", host, slot, path_length);
            advisory.path_length = Some(path_length);
        }

        if let Some(cn) = self.common_name() {
            let is_pattern = cn.contains(['*', '?']);
            if is_pattern && !wildcard_match(cn, server_name) {
                warn!("[SSL] {}: {} server certificate wildcard CommonName (CN) `{}' does NOT match server name!?", host, slot, cn);
                advisory.common_name_mismatch = Some(cn.to_string());
            } else if !is_pattern && cn != server_name {
                warn!("[SSL] {}: {} server certificate CommonName (CN) `{}' does NOT match server name!?", host, slot, cn);
                advisory.common_name_mismatch = Some(cn.to_string());
            } else {
                info!("[SSL] {}: {} server certificate CommonName (CN) `{}' matches", host, slot, cn);
            }
        }

        advisory
    }
}

impl AlgorithmSlot {
    pub fn matches_certificate(self, certificate: &Certificate) -> bool {
        certificate.algorithm == self
    }
}
