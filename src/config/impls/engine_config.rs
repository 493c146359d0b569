use crate::config::enums::mutex_mode::MutexMode;
use crate::config::enums::pass_phrase_dialog::PassPhraseDialog;
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::config::structs::engine_config::EngineConfig;

pub const DEFAULT_CRYPTO_DEVICE: &str = "builtin";
pub const DEFAULT_SESSION_CACHE_SIZE: usize = 512;
pub const DEFAULT_SESSION_CACHE_TIMEOUT: u64 = 300;
pub const DEFAULT_RANDOM_SEED_BYTES: usize = 512;

impl EngineConfig {
    /// Fills every unset field with its default; set fields are kept.
    pub fn normalize(&mut self) {
        self.crypto_device.get_or_insert_with(|| String::from(DEFAULT_CRYPTO_DEVICE));
        self.session_cache.get_or_insert(SessionCacheMode::none);
        self.session_cache_size.get_or_insert(DEFAULT_SESSION_CACHE_SIZE);
        self.session_cache_timeout.get_or_insert(DEFAULT_SESSION_CACHE_TIMEOUT);
        self.mutex.get_or_insert(MutexMode::none);
        self.pass_phrase_dialog.get_or_insert(PassPhraseDialog::builtin);
        self.random_seed_bytes.get_or_insert(DEFAULT_RANDOM_SEED_BYTES);
    }

    pub fn normalized(&self) -> EngineConfig {
        let mut config = self.clone();
        config.normalize();
        config
    }
}
