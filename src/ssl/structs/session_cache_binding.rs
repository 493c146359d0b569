use std::sync::Arc;
use std::time::Duration;
use crate::ssl::traits::session_cache::SessionCache;

/// Server-side caching with internal lookup disabled when a cache is bound.
#[derive(Debug, Clone, Default)]
pub struct SessionCacheBinding {
    pub cache: Option<Arc<dyn SessionCache>>,
    pub internal_lookup: bool,
    pub timeout: Duration,
}
