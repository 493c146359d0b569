use crate::ssl::structs::context_options::ContextOptions;
use crate::ssl::structs::protocol_set::ProtocolSet;

const PROTOCOL_OPTIONS: [(ProtocolSet, ContextOptions); 6] = [
    (ProtocolSet::SSLV2, ContextOptions::NO_SSLV2),
    (ProtocolSet::SSLV3, ContextOptions::NO_SSLV3),
    (ProtocolSet::TLSV1, ContextOptions::NO_TLSV1),
    (ProtocolSet::TLSV1_1, ContextOptions::NO_TLSV1_1),
    (ProtocolSet::TLSV1_2, ContextOptions::NO_TLSV1_2),
    (ProtocolSet::TLSV1_3, ContextOptions::NO_TLSV1_3),
];

impl ContextOptions {
    /// Disables every protocol missing from `protocols`.
    pub fn disabling(protocols: ProtocolSet) -> ContextOptions {
        PROTOCOL_OPTIONS
            .iter()
            .filter(|(protocol, _)| !protocols.contains(*protocol))
            .fold(ContextOptions::empty(), |options, (_, disable)| options | *disable)
    }

    pub fn enabled_protocols(&self) -> ProtocolSet {
        PROTOCOL_OPTIONS
            .iter()
            .filter(|(_, disable)| !self.contains(*disable))
            .fold(ProtocolSet::empty(), |set, (protocol, _)| set | *protocol)
    }
}
