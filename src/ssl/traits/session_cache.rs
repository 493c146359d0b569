use std::fmt::Debug;
use std::time::Duration;
use crate::ssl::enums::ssl_error::SslError;

/// Session storage; all locking is the implementor's responsibility.
pub trait SessionCache: Debug + Send + Sync {
    fn init(&self) -> Result<(), SslError>;

    fn kill(&self);

    fn on_new_entry(&self, id: &[u8], session: &[u8], timeout: Duration) -> bool;

    fn on_get_entry(&self, id: &[u8]) -> Option<Vec<u8>>;

    fn on_remove_entry(&self, id: &[u8]);

    /// Removes and returns a single-use entry. The default runs get then remove, so two
    /// callers may both see the entry; stores that can should do it under one lock.
    fn on_take_entry(&self, id: &[u8]) -> Option<Vec<u8>> {
        let session = self.on_get_entry(id)?;
        self.on_remove_entry(id);
        Some(session)
    }
}
