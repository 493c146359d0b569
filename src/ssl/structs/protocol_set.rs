use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProtocolSet: u8 {
        const SSLV2 = 1 << 0;
        const SSLV3 = 1 << 1;
        const TLSV1 = 1 << 2;
        const TLSV1_1 = 1 << 3;
        const TLSV1_2 = 1 << 4;
        const TLSV1_3 = 1 << 5;
    }
}
