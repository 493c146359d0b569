use crate::config::enums::verify_mode::VerifyMode;
use crate::ssl::structs::peer_verify_flags::PeerVerifyFlags;

impl PeerVerifyFlags {
    pub fn for_mode(mode: VerifyMode) -> PeerVerifyFlags {
        match mode {
            VerifyMode::none => PeerVerifyFlags::empty(),
            VerifyMode::optional | VerifyMode::optional_no_ca => PeerVerifyFlags::PEER,
            VerifyMode::require => PeerVerifyFlags::PEER | PeerVerifyFlags::FAIL_IF_NO_PEER_CERT,
        }
    }
}
