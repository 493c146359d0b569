use std::sync::Arc;
use std::time::Duration;
use crate::ssl::structs::session_cache_adapter::SessionCacheAdapter;
use crate::ssl::structs::session_cache_binding::SessionCacheBinding;
use crate::ssl::traits::session_cache::SessionCache;

impl SessionCacheBinding {
    /// Lookups go through the callbacks only; the library's own cache stays off.
    pub fn server(cache: Arc<dyn SessionCache>, timeout: Duration) -> SessionCacheBinding {
        SessionCacheBinding {
            cache: Some(cache),
            internal_lookup: false,
            timeout,
        }
    }

    pub fn disabled() -> SessionCacheBinding {
        SessionCacheBinding::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn storage(&self) -> Option<Arc<SessionCacheAdapter>> {
        self.cache
            .as_ref()
            .map(|cache| Arc::new(SessionCacheAdapter::new(cache.clone(), self.timeout)))
    }
}
