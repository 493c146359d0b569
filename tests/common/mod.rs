#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use num_bigint_dig::BigUint;
use rand::rngs::StdRng;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use vhost_tls::config::enums::protocol_version::ProtocolVersion;
use vhost_tls::config::enums::session_cache_mode::SessionCacheMode;
use vhost_tls::config::structs::configuration::Configuration;
use vhost_tls::config::structs::engine_config::EngineConfig;
use vhost_tls::config::structs::virtual_host_config::VirtualHostConfig;
use vhost_tls::ssl::enums::ssl_error::SslError;
use vhost_tls::ssl::ssl::load_private_key;
use vhost_tls::ssl::structs::dh_params::DhParams;
use vhost_tls::ssl::structs::engine_collaborators::EngineCollaborators;
use vhost_tls::ssl::structs::engine_state::EngineState;
use vhost_tls::ssl::structs::file_key_material_source::FileKeyMaterialSource;
use vhost_tls::ssl::structs::host_config::HostConfig;
use vhost_tls::ssl::structs::key_material_table::KeyMaterialTable;
use vhost_tls::ssl::structs::memory_session_cache::MemorySessionCache;
use vhost_tls::ssl::structs::no_mutex::NoMutex;
use vhost_tls::ssl::traits::engine_mutex::EngineMutex;
use vhost_tls::ssl::traits::ephemeral_key_generator::EphemeralKeyGenerator;
use vhost_tls::ssl::traits::fatal_handler::FatalHandler;

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Turns process termination into a panic carrying the error text.
pub struct PanicFatalHandler;

impl FatalHandler for PanicFatalHandler {
    fn die(&self, error: &SslError) -> ! {
        panic!("fatal: {}", error)
    }
}

/// Hands out the fixture RSA key and a tiny DH group instead of generating anything.
pub struct FakeKeyGenerator {
    rsa: RsaPrivateKey,
    pub calls: AtomicUsize,
}

impl FakeKeyGenerator {
    pub fn new() -> FakeKeyGenerator {
        let der = load_private_key(fixture("server.key")).unwrap();
        FakeKeyGenerator {
            rsa: RsaPrivateKey::from_pkcs8_der(&der).unwrap(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl EphemeralKeyGenerator for FakeKeyGenerator {
    fn generate_rsa(&self, _rng: &mut StdRng, _bits: usize) -> Result<RsaPrivateKey, SslError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rsa.clone())
    }

    fn generate_dh(&self, _rng: &mut StdRng, _bits: usize) -> Result<DhParams, SslError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DhParams {
            p: BigUint::from(23u32),
            q: BigUint::from(11u32),
            g: BigUint::from(4u32),
        })
    }
}

pub struct FailingKeyGenerator;

impl EphemeralKeyGenerator for FailingKeyGenerator {
    fn generate_rsa(&self, _rng: &mut StdRng, bits: usize) -> Result<RsaPrivateKey, SslError> {
        Err(SslError::TemporaryKey { kind: String::from("RSA private key"), bits })
    }

    fn generate_dh(&self, _rng: &mut StdRng, bits: usize) -> Result<DhParams, SslError> {
        Err(SslError::TemporaryKey { kind: String::from("DH parameters"), bits })
    }
}

/// Counts lifecycle calls; `initialize` fails when asked to.
pub struct RecordingMutex {
    pub fail: bool,
    pub initialized: AtomicUsize,
    pub reinitialized: AtomicUsize,
    pub killed: AtomicUsize,
}

impl RecordingMutex {
    pub fn new(fail: bool) -> RecordingMutex {
        RecordingMutex {
            fail,
            initialized: AtomicUsize::new(0),
            reinitialized: AtomicUsize::new(0),
            killed: AtomicUsize::new(0),
        }
    }
}

impl EngineMutex for RecordingMutex {
    fn initialize(&self) -> Result<(), SslError> {
        self.initialized.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SslError::MutexInit(String::from("lock file busy")));
        }
        Ok(())
    }

    fn reinit_after_fork(&self) -> Result<(), SslError> {
        self.reinitialized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn kill(&self) {
        self.killed.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn collaborators() -> EngineCollaborators {
    EngineCollaborators {
        key_source: Arc::new(FileKeyMaterialSource),
        key_generator: Arc::new(FakeKeyGenerator::new()),
        mutex: Arc::new(NoMutex),
        session_cache: Some(Arc::new(MemorySessionCache::new(64))),
        fatal: Arc::new(PanicFatalHandler),
    }
}

pub fn rsa_host(server_name: &str, bind_address: &str) -> VirtualHostConfig {
    VirtualHostConfig {
        server_name: server_name.to_string(),
        bind_address: bind_address.to_string(),
        enabled: Some(true),
        source: Some(format!("vhosts.toml:{}", bind_address.len())),
        protocols: Some(vec![ProtocolVersion::tlsv1_2, ProtocolVersion::tlsv1_3]),
        certificate_files: vec![fixture("server.pem")],
        key_files: vec![fixture("server.key")],
        ..Default::default()
    }
}

pub fn dsa_host(server_name: &str, bind_address: &str) -> VirtualHostConfig {
    VirtualHostConfig {
        certificate_files: vec![fixture("dsa_server.pem")],
        key_files: vec![fixture("dsa_server.key")],
        ..rsa_host(server_name, bind_address)
    }
}

pub fn create_test_config(virtual_hosts: Vec<VirtualHostConfig>) -> Configuration {
    Configuration {
        log_level: String::from("debug"),
        engine: EngineConfig {
            session_cache: Some(SessionCacheMode::memory),
            random_seed_bytes: Some(64),
            ..Default::default()
        },
        virtual_hosts,
    }
}

/// Engine state with no hosts, for building hosts one at a time.
pub fn create_test_state() -> EngineState {
    let (state, _) = EngineState::init_module(&create_test_config(Vec::new()), &collaborators()).unwrap();
    state
}

/// Engine state whose key material covers `virtual_hosts`; the hosts are returned unbuilt.
pub fn prepare_hosts(virtual_hosts: Vec<VirtualHostConfig>) -> (EngineState, Vec<HostConfig>) {
    let mut state = create_test_state();
    let engine = EngineConfig::default().normalized();
    let hosts: Vec<HostConfig> = virtual_hosts
        .iter()
        .map(|host| HostConfig::from_config(host, &engine))
        .collect();
    state.key_material = KeyMaterialTable::populate(&FileKeyMaterialSource, &hosts).unwrap();
    (state, hosts)
}
