use std::sync::Arc;
use crate::config::enums::mutex_mode::MutexMode;
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::config::impls::engine_config::DEFAULT_SESSION_CACHE_SIZE;
use crate::config::structs::engine_config::EngineConfig;
use crate::ssl::structs::engine_collaborators::EngineCollaborators;
use crate::ssl::structs::file_key_material_source::FileKeyMaterialSource;
use crate::ssl::structs::file_mutex::FileMutex;
use crate::ssl::structs::memory_session_cache::MemorySessionCache;
use crate::ssl::structs::no_mutex::NoMutex;
use crate::ssl::structs::process_fatal_handler::ProcessFatalHandler;
use crate::ssl::structs::system_key_generator::SystemKeyGenerator;
use crate::ssl::traits::engine_mutex::EngineMutex;
use crate::ssl::traits::session_cache::SessionCache;

pub const DEFAULT_MUTEX_FILE: &str = "vhost-tls.lock";

impl EngineCollaborators {
    /// Production collaborators selected by the engine settings.
    pub fn from_config(engine: &EngineConfig) -> EngineCollaborators {
        let mutex: Arc<dyn EngineMutex> = match engine.mutex.unwrap_or_default() {
            MutexMode::none => Arc::new(NoMutex),
            MutexMode::file => {
                let path = engine
                    .mutex_file
                    .clone()
                    .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_MUTEX_FILE).to_string_lossy().into_owned());
                Arc::new(FileMutex::new(path))
            }
        };
        let session_cache: Option<Arc<dyn SessionCache>> = match engine.session_cache.unwrap_or_default() {
            SessionCacheMode::none => None,
            SessionCacheMode::memory => Some(Arc::new(MemorySessionCache::new(
                engine.session_cache_size.unwrap_or(DEFAULT_SESSION_CACHE_SIZE),
            ))),
        };
        EngineCollaborators {
            key_source: Arc::new(FileKeyMaterialSource),
            key_generator: Arc::new(SystemKeyGenerator::default()),
            mutex,
            session_cache,
            fatal: Arc::new(ProcessFatalHandler::new()),
        }
    }
}
