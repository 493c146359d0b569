use crate::config::enums::protocol_version::ProtocolVersion;

impl ProtocolVersion {
    pub const ALL: [ProtocolVersion; 6] = [
        ProtocolVersion::sslv2,
        ProtocolVersion::sslv3,
        ProtocolVersion::tlsv1,
        ProtocolVersion::tlsv1_1,
        ProtocolVersion::tlsv1_2,
        ProtocolVersion::tlsv1_3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProtocolVersion::sslv2 => "SSLv2",
            ProtocolVersion::sslv3 => "SSLv3",
            ProtocolVersion::tlsv1 => "TLSv1",
            ProtocolVersion::tlsv1_1 => "TLSv1.1",
            ProtocolVersion::tlsv1_2 => "TLSv1.2",
            ProtocolVersion::tlsv1_3 => "TLSv1.3",
        }
    }
}
