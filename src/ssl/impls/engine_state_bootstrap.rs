use log::{debug, error, info};
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::config::impls::engine_config::DEFAULT_RANDOM_SEED_BYTES;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::{check_servers, resolve_crypto_provider, seed_random};
use crate::ssl::structs::engine_collaborators::EngineCollaborators;
use crate::ssl::structs::engine_state::EngineState;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::key_material_table::KeyMaterialTable;
use crate::ssl::structs::temporary_keys::TemporaryKeys;
use crate::ssl::structs::version_info::VersionInfo;

pub const LIBRARY: &str = "ring";

impl EngineState {
    /// Runs once per start and once per reload. Fatal errors never return: they go to the
    /// fatal handler. Only a mutex failure comes back as `Err`.
    pub fn init_module(config: &Configuration, collaborators: &EngineCollaborators) -> Result<(EngineState, Vec<HostConfig>), SslError> {
        let fatal = collaborators.fatal.as_ref();
        let engine = config.engine.normalized();

        let mut hosts: Vec<HostConfig> = config
            .virtual_hosts
            .iter()
            .map(|host| HostConfig::from_config(host, &engine))
            .collect();
        debug!("[INIT] {} virtual host(s), {} enabled", hosts.len(), hosts.iter().filter(|host| host.enabled).count());

        info!("[INIT] Init: Initializing {} library", LIBRARY);

        let seed_bytes = engine.random_seed_bytes.unwrap_or(DEFAULT_RANDOM_SEED_BYTES);
        info!("[INIT] Init: Seeding PRNG with {} bytes of entropy", seed_bytes);
        let mut rng = seed_random(seed_bytes);

        let key_material = KeyMaterialTable::populate(collaborators.key_source.as_ref(), &hosts)
            .unwrap_or_else(|e| fatal.die(&e));
        debug!("[INIT] {} certificate/key pair(s) available", key_material.len());

        let temporary_keys = TemporaryKeys::generate(collaborators.key_generator.as_ref(), &mut rng)
            .unwrap_or_else(|e| fatal.die(&e));

        let provider = resolve_crypto_provider(engine.crypto_device.as_deref()).unwrap_or_else(|e| fatal.die(&e));
        if let Some(device) = engine.crypto_device.as_deref() {
            info!("[INIT] Init: loaded Crypto Device API `{}'", device);
        }
        if (*provider).clone().install_default().is_err() {
            debug!("[INIT] a process default crypto provider is already installed");
        }

        if let Err(e) = collaborators.mutex.initialize() {
            error!("[INIT] {}", e);
            return Err(e);
        }

        let session_cache_mode = engine.session_cache.unwrap_or_default();
        let session_cache = match session_cache_mode {
            SessionCacheMode::none => None,
            SessionCacheMode::memory => collaborators.session_cache.clone(),
        };
        if let Some(cache) = &session_cache {
            cache.init().unwrap_or_else(|e| fatal.die(&e));
        }

        let mut state = EngineState {
            temporary_keys,
            crypto_device: engine.crypto_device.clone(),
            provider,
            session_cache_mode,
            session_cache,
            mutex: collaborators.mutex.clone(),
            pid: std::process::id(),
            key_material,
            version: None,
            rng,
        };

        for host in hosts.iter_mut().filter(|host| host.enabled) {
            host.configure(&state).unwrap_or_else(|e| fatal.die(&e));
        }

        check_servers(&hosts);

        let version = VersionInfo::current(LIBRARY);
        info!("[INIT] {}", version);
        state.version = Some(version);

        Ok((state, hosts))
    }
}
