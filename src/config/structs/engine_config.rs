use serde::{Deserialize, Serialize};
use crate::config::enums::mutex_mode::MutexMode;
use crate::config::enums::pass_phrase_dialog::PassPhraseDialog;
use crate::config::enums::session_cache_mode::SessionCacheMode;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub crypto_device: Option<String>,
    pub session_cache: Option<SessionCacheMode>,
    pub session_cache_size: Option<usize>,
    pub session_cache_timeout: Option<u64>,
    pub mutex: Option<MutexMode>,
    pub mutex_file: Option<String>,
    pub pass_phrase_dialog: Option<PassPhraseDialog>,
    pub random_seed_bytes: Option<usize>,
}
