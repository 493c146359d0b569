use std::sync::Arc;
use std::time::Duration;
use rustls::server::StoresServerSessions;
use crate::ssl::structs::session_cache_adapter::SessionCacheAdapter;
use crate::ssl::traits::session_cache::SessionCache;

impl SessionCacheAdapter {
    pub fn new(cache: Arc<dyn SessionCache>, timeout: Duration) -> SessionCacheAdapter {
        SessionCacheAdapter { cache, timeout }
    }
}

impl StoresServerSessions for SessionCacheAdapter {
    fn put(&self, key: Vec<u8>, value: Vec<u8>) -> bool {
        self.cache.on_new_entry(&key, &value, self.timeout)
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.cache.on_get_entry(key)
    }

    fn take(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.cache.on_take_entry(key)
    }

    fn can_cache(&self) -> bool {
        true
    }
}
