use std::collections::HashMap;
use std::time::Instant;
use parking_lot::RwLock;

#[derive(Debug)]
pub struct MemorySessionCache {
    pub(crate) entries: RwLock<HashMap<Vec<u8>, (Vec<u8>, Instant)>>,
    pub(crate) capacity: usize,
}
