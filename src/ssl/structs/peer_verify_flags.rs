use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PeerVerifyFlags: u8 {
        const PEER = 1 << 0;
        const FAIL_IF_NO_PEER_CERT = 1 << 1;
    }
}
