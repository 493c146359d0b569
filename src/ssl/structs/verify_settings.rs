use crate::config::enums::verify_mode::VerifyMode;
use crate::ssl::structs::peer_verify_flags::PeerVerifyFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifySettings {
    pub mode: VerifyMode,
    pub depth: u32,
    pub flags: PeerVerifyFlags,
}
