use std::sync::Arc;
use rand::rngs::StdRng;
use rustls::crypto::CryptoProvider;
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::ssl::structs::key_material_table::KeyMaterialTable;
use crate::ssl::structs::temporary_keys::TemporaryKeys;
use crate::ssl::structs::version_info::VersionInfo;
use crate::ssl::traits::engine_mutex::EngineMutex;
use crate::ssl::traits::session_cache::SessionCache;

/// One instance per process generation; recreated on every reload.
pub struct EngineState {
    pub temporary_keys: TemporaryKeys,
    pub crypto_device: Option<String>,
    pub provider: Arc<CryptoProvider>,
    pub session_cache_mode: SessionCacheMode,
    pub session_cache: Option<Arc<dyn SessionCache>>,
    pub mutex: Arc<dyn EngineMutex>,
    pub pid: u32,
    pub key_material: KeyMaterialTable,
    pub version: Option<VersionInfo>,
    pub(crate) rng: StdRng,
}
