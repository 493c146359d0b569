use crate::config::enums::verify_mode::VerifyMode;
use crate::ssl::structs::peer_verify_flags::PeerVerifyFlags;
use crate::ssl::structs::verify_settings::VerifySettings;

pub const DEFAULT_VERIFY_DEPTH: u32 = 1;

impl VerifySettings {
    /// Unset mode means no verification, unset depth means one level.
    pub fn new(mode: Option<VerifyMode>, depth: Option<u32>) -> VerifySettings {
        let mode = mode.unwrap_or_default();
        VerifySettings {
            mode,
            depth: depth.unwrap_or(DEFAULT_VERIFY_DEPTH),
            flags: PeerVerifyFlags::for_mode(mode),
        }
    }
}

impl Default for VerifySettings {
    fn default() -> Self {
        VerifySettings::new(None, None)
    }
}
