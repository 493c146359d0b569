use std::sync::Arc;
use std::time::Duration;
use crate::ssl::traits::session_cache::SessionCache;

#[derive(Debug)]
pub struct SessionCacheAdapter {
    pub(crate) cache: Arc<dyn SessionCache>,
    pub(crate) timeout: Duration,
}
