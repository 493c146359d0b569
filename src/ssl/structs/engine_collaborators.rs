use std::sync::Arc;
use crate::ssl::traits::engine_mutex::EngineMutex;
use crate::ssl::traits::ephemeral_key_generator::EphemeralKeyGenerator;
use crate::ssl::traits::fatal_handler::FatalHandler;
use crate::ssl::traits::key_material_source::KeyMaterialSource;
use crate::ssl::traits::session_cache::SessionCache;

#[derive(Clone)]
pub struct EngineCollaborators {
    pub key_source: Arc<dyn KeyMaterialSource>,
    pub key_generator: Arc<dyn EphemeralKeyGenerator>,
    pub mutex: Arc<dyn EngineMutex>,
    pub session_cache: Option<Arc<dyn SessionCache>>,
    pub fatal: Arc<dyn FatalHandler>,
}
