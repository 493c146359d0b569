use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use log::{debug, info, warn};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rcgen::{CertificateParams, DnType, KeyPair, PKCS_RSA_SHA256};
use rsa::pkcs8::EncodePrivateKey;
use rsa::RsaPrivateKey;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivatePkcs8KeyDer};
use rustls::{CipherSuite, RootCertStore, SupportedCipherSuite};
use rustls_pemfile::Item;
use x509_parser::prelude::parse_x509_certificate;
use crate::common::common::split_bind_address;
use crate::common::structs::custom_error::CustomError;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::binding_collision::BindingCollision;
use crate::ssl::structs::consistency_report::ConsistencyReport;
use crate::ssl::structs::host_config::HostConfig;

const PEM_MARKER: &[u8] = b"-----BEGIN";
const SEED_LENGTH: usize = 32;

pub fn is_pem(data: &[u8]) -> bool {
    data.windows(PEM_MARKER.len()).any(|window| window == PEM_MARKER)
}

/// Crypto devices this build can activate.
pub fn resolve_crypto_provider(device: Option<&str>) -> Result<Arc<CryptoProvider>, SslError> {
    match device {
        None | Some("builtin") | Some("ring") => Ok(Arc::new(rustls::crypto::ring::default_provider())),
        Some(other) => Err(SslError::CryptoDevice(other.to_string())),
    }
}

/// Folds `scratch_bytes` of operating system entropy into a seed; the scratch buffer dies here.
pub fn seed_random(scratch_bytes: usize) -> StdRng {
    let mut scratch = vec![0u8; scratch_bytes.max(SEED_LENGTH)];
    OsRng.fill_bytes(&mut scratch);
    let mut seed = [0u8; SEED_LENGTH];
    for chunk in scratch.chunks(SEED_LENGTH) {
        for (byte, value) in seed.iter_mut().zip(chunk) {
            *byte ^= value;
        }
    }
    scratch.fill(0);
    StdRng::from_seed(seed)
}

/// OpenSSL name and class keywords of every suite the ring provider offers.
const CIPHER_CATALOG: &[(CipherSuite, &str, &[&str])] = &[
    (CipherSuite::TLS13_AES_128_GCM_SHA256, "TLS_AES_128_GCM_SHA256", &["TLSv1.3", "AES", "AES128", "AESGCM", "SHA256"]),
    (CipherSuite::TLS13_AES_256_GCM_SHA384, "TLS_AES_256_GCM_SHA384", &["TLSv1.3", "AES", "AES256", "AESGCM", "SHA384"]),
    (CipherSuite::TLS13_CHACHA20_POLY1305_SHA256, "TLS_CHACHA20_POLY1305_SHA256", &["TLSv1.3", "CHACHA20", "SHA256"]),
    (
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        "ECDHE-ECDSA-AES128-GCM-SHA256",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aECDSA", "ECDSA", "AES", "AES128", "AESGCM", "SHA256"],
    ),
    (
        CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        "ECDHE-ECDSA-AES256-GCM-SHA384",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aECDSA", "ECDSA", "AES", "AES256", "AESGCM", "SHA384"],
    ),
    (
        CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
        "ECDHE-ECDSA-CHACHA20-POLY1305",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aECDSA", "ECDSA", "CHACHA20", "SHA256"],
    ),
    (
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        "ECDHE-RSA-AES128-GCM-SHA256",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aRSA", "AES", "AES128", "AESGCM", "SHA256"],
    ),
    (
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        "ECDHE-RSA-AES256-GCM-SHA384",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aRSA", "AES", "AES256", "AESGCM", "SHA384"],
    ),
    (
        CipherSuite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        "ECDHE-RSA-CHACHA20-POLY1305",
        &["TLSv1.2", "kECDHE", "ECDHE", "EECDH", "aRSA", "CHACHA20", "SHA256"],
    ),
];

/// Classes every offered suite belongs to.
const CIPHER_CLASSES_ALL: &[&str] = &["ALL", "DEFAULT", "HIGH"];

/// OpenSSL classes that exist but match nothing this provider offers.
const CIPHER_CLASSES_NONE: &[&str] = &[
    "aNULL", "eNULL", "NULL", "ADH", "AECDH", "COMPLEMENTOFALL", "COMPLEMENTOFDEFAULT", "MD5", "RC4", "EXP", "EXPORT",
    "EXPORT40", "EXPORT56", "LOW", "MEDIUM", "DES", "3DES", "IDEA", "SEED", "CAMELLIA", "ARIA", "PSK", "SRP", "kRSA",
    "RSA", "aDSS", "DSS", "DHE", "EDH", "kDHE", "kEDH", "SSLv2", "SSLv3", "TLSv1", "SHA1", "SHA",
];

fn normalize_cipher_name(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace('-', "_")
}

fn matches_any(element: &str, names: &[&str]) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(element))
}

/// Suites named by one cipher-string element: a rustls or OpenSSL suite name, a class
/// keyword, or classes joined with `+`. `None` when nothing by that name exists.
fn select_cipher_class(element: &str, available: &[SupportedCipherSuite]) -> Option<Vec<SupportedCipherSuite>> {
    if element.contains('+') {
        let mut classes = element.split('+');
        let first = select_cipher_class(classes.next()?, available)?;
        return classes.try_fold(first, |selected, class| {
            let narrowing = select_cipher_class(class, available)?;
            Some(selected.into_iter().filter(|suite| narrowing.contains(suite)).collect())
        });
    }
    if matches_any(element, CIPHER_CLASSES_ALL) {
        return Some(available.to_vec());
    }
    if matches_any(element, CIPHER_CLASSES_NONE) {
        return Some(Vec::new());
    }

    let normalized = normalize_cipher_name(element);
    let selected: Vec<SupportedCipherSuite> = available
        .iter()
        .filter(|suite| {
            let code = suite.suite();
            format!("{:?}", code) == normalized
                || CIPHER_CATALOG
                    .iter()
                    .find(|(known, _, _)| *known == code)
                    .is_some_and(|(_, openssl, classes)| openssl.eq_ignore_ascii_case(element) || matches_any(element, classes))
        })
        .copied()
        .collect();
    if selected.is_empty() { None } else { Some(selected) }
}

/// OpenSSL-style cipher string. Elements are separated by `:`, `,` or spaces; `!` excludes
/// for good, `-` removes, `+` moves to the end and a bare element appends. Unknown elements
/// are skipped with a warning; only an empty final selection is an error.
pub fn resolve_cipher_suites(cipher_suite: &str, provider: &CryptoProvider) -> Result<Vec<SupportedCipherSuite>, String> {
    let available = provider.cipher_suites.as_slice();
    let mut selected: Vec<SupportedCipherSuite> = Vec::new();
    let mut excluded: Vec<SupportedCipherSuite> = Vec::new();

    for token in cipher_suite.split([':', ',', ' ']).map(str::trim).filter(|token| !token.is_empty()) {
        if token.starts_with('@') {
            debug!("[SSL] ignoring cipher directive `{}'", token);
            continue;
        }
        let (operator, element) = match token.strip_prefix(['!', '-', '+']) {
            Some(element) => (token.chars().next(), element),
            None => (None, token),
        };
        let Some(matches) = select_cipher_class(element, available) else {
            warn!("[SSL] ignoring unknown cipher `{}'", element);
            continue;
        };

        match operator {
            Some('!') => {
                selected.retain(|suite| !matches.contains(suite));
                for suite in matches {
                    if !excluded.contains(&suite) {
                        excluded.push(suite);
                    }
                }
            }
            Some('-') => selected.retain(|suite| !matches.contains(suite)),
            Some('+') => {
                let (moved, kept): (Vec<SupportedCipherSuite>, Vec<SupportedCipherSuite>) =
                    selected.into_iter().partition(|suite| matches.contains(suite));
                selected = kept;
                selected.extend(moved);
            }
            _ => {
                for suite in matches {
                    if !excluded.contains(&suite) && !selected.contains(&suite) {
                        selected.push(suite);
                    }
                }
            }
        }
    }

    if selected.is_empty() {
        return Err(format!("`{}' selects no cipher suites", cipher_suite));
    }
    Ok(selected)
}

/// Certificates of a PEM bundle, or the single certificate of a DER file.
pub fn load_certificates<P: AsRef<Path>>(path: P) -> Result<Vec<CertificateDer<'static>>, String> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_pem(&data) {
        return rustls_pemfile::certs(&mut data.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("{}: {}", path.display(), e));
    }
    parse_x509_certificate(&data).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(vec![CertificateDer::from(data)])
}

/// First private key of a PEM file, or the raw bytes of a DER file.
pub fn load_private_key<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, String> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if !is_pem(&data) {
        return Ok(data);
    }
    let text = String::from_utf8_lossy(&data);
    if text.contains("ENCRYPTED PRIVATE KEY") || text.contains("Proc-Type: 4,ENCRYPTED") {
        return Err(format!("{}: encrypted private keys are not supported by the builtin pass phrase dialog", path.display()));
    }
    for item in rustls_pemfile::read_all(&mut data.as_slice()) {
        match item.map_err(|e| format!("{}: {}", path.display(), e))? {
            Item::Pkcs8Key(key) => return Ok(key.secret_pkcs8_der().to_vec()),
            Item::Pkcs1Key(key) => return Ok(key.secret_pkcs1_der().to_vec()),
            Item::Sec1Key(key) => return Ok(key.secret_sec1_der().to_vec()),
            _ => continue,
        }
    }
    Err(format!("{}: no private key found", path.display()))
}

/// Extra chain certificates; the leading entry is dropped when the chain file is also a certificate file.
pub fn load_chain(host: &HostConfig) -> Result<Vec<CertificateDer<'static>>, String> {
    let Some(chain_file) = host.certificate_chain_file.as_deref() else {
        return Ok(Vec::new());
    };
    let mut chain = load_certificates(chain_file)?;
    let skip_first = host.certificate_files.iter().any(|file| file == chain_file);
    if skip_first && !chain.is_empty() {
        debug!("[SSL] {}: skipping leaf certificate at the head of {}", host.id, chain_file);
        chain.remove(0);
    }
    Ok(chain)
}

/// Trust anchors for client verification from a bundle file and/or directory.
pub fn load_verify_locations(file: Option<&str>, directory: Option<&str>) -> Result<RootCertStore, String> {
    let mut store = RootCertStore::empty();
    if let Some(file) = file {
        for certificate in load_certificates(file)? {
            store.add(certificate).map_err(|e| format!("{}: {}", file, e))?;
        }
    }
    if let Some(directory) = directory {
        let entries = fs::read_dir(directory).map_err(|e| format!("{}: {}", directory, e))?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            match load_certificates(&path) {
                Ok(certificates) => {
                    let (added, ignored) = store.add_parsable_certificates(certificates);
                    debug!("[TRUST] {}: {} verify location(s) added, {} ignored", path.display(), added, ignored);
                }
                Err(e) => debug!("[TRUST] skipping {}", e),
            }
        }
    }
    Ok(store)
}

fn source_of(host: &HostConfig) -> &str {
    host.source.as_deref().unwrap_or("unknown")
}

/// Port convention and binding collision audits. Warnings only.
pub fn check_servers(hosts: &[HostConfig]) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for host in hosts {
        let Some((_, port)) = split_bind_address(&host.bind_address) else {
            continue;
        };
        if host.enabled && port == 80 {
            let message = format!("{}: You configured HTTPS(443) on the standard HTTP(80) port!", host.id);
            warn!("[CHECK] {}", message);
            report.port_warnings.push(message);
        } else if !host.enabled && port == 443 {
            let message = format!("{}: You configured HTTP(80) on the standard HTTPS(443) port!", host.id);
            warn!("[CHECK] {}", message);
            report.port_warnings.push(message);
        }
    }

    let mut bindings: HashMap<String, &HostConfig> = HashMap::new();
    for host in hosts.iter().filter(|host| host.enabled) {
        let binding = match split_bind_address(&host.bind_address) {
            Some((address, port)) => format!("{}:{}", address, port),
            None => host.bind_address.trim().to_string(),
        };
        match bindings.get(&binding) {
            Some(first) => {
                warn!(
                    "[CHECK] SSL server IP/port conflict: {} ({}) vs. {} ({})",
                    first.id, source_of(first), host.id, source_of(host)
                );
                warn!("[CHECK] only the certificates of {} will be used on {}", first.id, binding);
                report.collisions.push(BindingCollision {
                    binding,
                    first: first.id.to_string(),
                    second: host.id.to_string(),
                });
            }
            None => {
                bindings.insert(binding, host);
            }
        }
    }

    if !report.collisions.is_empty() {
        warn!("[CHECK] Init: You should not use name-based virtual hosts in conjunction with SSL!!");
    }

    report
}

/// Writes an RSA key and a self-signed certificate for `localhost` and `domain`. Development use only.
pub fn create_self_signed(domain: &str, key_file: &str, cert_file: &str, bits: usize) -> Result<(), CustomError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let mut rng = seed_random(SEED_LENGTH);
    let rsa_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| CustomError::new(&format!("[CERTGEN] RSA key generation failed: {}", e)))?;
    let pkcs8 = rsa_key
        .to_pkcs8_der()
        .map_err(|e| CustomError::new(&format!("[CERTGEN] RSA key encoding failed: {}", e)))?;
    let key_pair = KeyPair::from_pkcs8_der_and_sign_algo(&PrivatePkcs8KeyDer::from(pkcs8.as_bytes().to_vec()), &PKCS_RSA_SHA256)
        .map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;

    let mut params = CertificateParams::new(subject_alt_names).map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;
    params.distinguished_name = rcgen::DistinguishedName::new();
    params.distinguished_name.push(DnType::CommonName, domain);
    let cert = params.self_signed(&key_pair).map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;

    fs::write(key_file, key_pair.serialize_pem()).map_err(|e| {
        CustomError::new(&format!("[CERTGEN] The key file {} could not be generated: {}", key_file, e))
    })?;
    info!("[CERTGEN] The key file {} has been generated", key_file);
    fs::write(cert_file, cert.pem()).map_err(|e| {
        CustomError::new(&format!("[CERTGEN] The cert file {} could not be generated: {}", cert_file, e))
    })?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);

    info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", key_file, cert_file);
    Ok(())
}
