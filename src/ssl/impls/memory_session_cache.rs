use std::collections::HashMap;
use std::time::{Duration, Instant};
use log::debug;
use parking_lot::RwLock;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::memory_session_cache::MemorySessionCache;
use crate::ssl::traits::session_cache::SessionCache;

impl MemorySessionCache {
    pub fn new(capacity: usize) -> MemorySessionCache {
        MemorySessionCache {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn purge_expired(entries: &mut HashMap<Vec<u8>, (Vec<u8>, Instant)>, now: Instant) {
        entries.retain(|_, (_, expires)| *expires > now);
    }
}

impl SessionCache for MemorySessionCache {
    fn init(&self) -> Result<(), SslError> {
        if self.capacity == 0 {
            return Err(SslError::SessionCache(String::from("session cache size must be positive")));
        }
        debug!("[SSL] in-memory session cache ready ({} entries)", self.capacity);
        Ok(())
    }

    fn kill(&self) {
        self.entries.write().clear();
    }

    fn on_new_entry(&self, id: &[u8], session: &[u8], timeout: Duration) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.write();
        if entries.len() >= self.capacity && !entries.contains_key(id) {
            Self::purge_expired(&mut entries, now);
        }
        if entries.len() >= self.capacity && !entries.contains_key(id) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, (_, expires))| *expires)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => return false,
            }
        }
        entries.insert(id.to_vec(), (session.to_vec(), now + timeout));
        true
    }

    fn on_get_entry(&self, id: &[u8]) -> Option<Vec<u8>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(id) {
                None => return None,
                Some((session, expires)) if *expires > now => return Some(session.clone()),
                Some(_) => {}
            }
        }
        self.entries.write().remove(id);
        None
    }

    fn on_remove_entry(&self, id: &[u8]) {
        self.entries.write().remove(id);
    }

    fn on_take_entry(&self, id: &[u8]) -> Option<Vec<u8>> {
        let (session, expires) = self.entries.write().remove(id)?;
        (expires > Instant::now()).then_some(session)
    }
}
