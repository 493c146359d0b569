use thiserror::Error;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;

#[derive(Debug, Error)]
pub enum SslError {
    #[error("{0}: no SSL certificate set [hint: certificate_files]")]
    MissingCertificatePath(String),
    #[error("{0}: illegal attempt to re-initialise SSL for server")]
    IllegalReinitialization(String),
    #[error("{0}: no SSL protocols available [hint: protocols]")]
    EmptyProtocolSet(String),
    #[error("{host}: unable to determine list of acceptable CA certificates for client authentication: {reason}")]
    CaListLoad { host: String, reason: String },
    #[error("{host}: unable to configure verify locations for client authentication: {reason}")]
    VerifyLocations { host: String, reason: String },
    #[error("{host}: unable to configure permitted SSL ciphers: {reason}")]
    CipherSuite { host: String, reason: String },
    #[error("{host}: unable to configure X.509 CRL storage for certificate revocation: {reason}")]
    RevocationStore { host: String, reason: String },
    #[error("{host}: failed to configure CA certificate chain: {reason}")]
    CertificateChain { host: String, reason: String },
    #[error("{0}: server should be SSL-aware but has no certificate configured [hint: certificate_files]")]
    NoCertificate(String),
    #[error("{host}: unable to import {slot} server certificate: {reason}")]
    CertificateDecode { host: String, slot: AlgorithmSlot, reason: String },
    #[error("{0}: server should be SSL-aware but has no private key configured [hint: key_files]")]
    NoPrivateKey(String),
    #[error("{host}: unable to import {slot} server private key: {reason}")]
    PrivateKeyDecode { host: String, slot: AlgorithmSlot, reason: String },
    #[error("{host}: {slot} slot holds {found} material")]
    AlgorithmMismatch { host: String, slot: AlgorithmSlot, found: AlgorithmSlot },
    #[error("failed to generate temporary {bits} bit {kind}")]
    TemporaryKey { kind: String, bits: usize },
    #[error("failed to load crypto device API `{0}'")]
    CryptoDevice(String),
    #[error("failed to initialize the SSL mutex: {0}")]
    MutexInit(String),
    #[error("failed to initialize the session cache: {0}")]
    SessionCache(String),
    #[error("{host}: unable to read key material: {reason}")]
    KeyMaterial { host: String, reason: String },
    #[error("{host}: unable to build server configuration: {reason}")]
    ServerConfig { host: String, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
