use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ContextOptions: u32 {
        const NO_SSLV2 = 1 << 0;
        const NO_SSLV3 = 1 << 1;
        const NO_TLSV1 = 1 << 2;
        const NO_TLSV1_1 = 1 << 3;
        const NO_TLSV1_2 = 1 << 4;
        const NO_TLSV1_3 = 1 << 5;
        const NO_RENEGOTIATION = 1 << 6;
        const SINGLE_DH_USE = 1 << 7;
    }
}
