use crate::config::enums::protocol_version::ProtocolVersion;
use crate::ssl::structs::protocol_set::ProtocolSet;

impl ProtocolSet {
    /// `None` accepts every protocol; an empty list yields an empty set.
    pub fn from_versions(versions: Option<&[ProtocolVersion]>) -> ProtocolSet {
        match versions {
            None => ProtocolSet::all(),
            Some(versions) => versions
                .iter()
                .fold(ProtocolSet::empty(), |set, version| set | ProtocolSet::from_version(*version)),
        }
    }

    pub fn from_version(version: ProtocolVersion) -> ProtocolSet {
        match version {
            ProtocolVersion::sslv2 => ProtocolSet::SSLV2,
            ProtocolVersion::sslv3 => ProtocolSet::SSLV3,
            ProtocolVersion::tlsv1 => ProtocolSet::TLSV1,
            ProtocolVersion::tlsv1_1 => ProtocolSet::TLSV1_1,
            ProtocolVersion::tlsv1_2 => ProtocolSet::TLSV1_2,
            ProtocolVersion::tlsv1_3 => ProtocolSet::TLSV1_3,
        }
    }

    pub fn versions(&self) -> Vec<ProtocolVersion> {
        ProtocolVersion::ALL
            .into_iter()
            .filter(|version| self.contains(ProtocolSet::from_version(*version)))
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.versions().iter().map(|version| version.name().to_string()).collect()
    }

    /// The subset rustls can negotiate.
    pub fn rustls_versions(&self) -> Vec<&'static rustls::SupportedProtocolVersion> {
        let mut versions = Vec::new();
        if self.contains(ProtocolSet::TLSV1_3) {
            versions.push(&rustls::version::TLS13);
        }
        if self.contains(ProtocolSet::TLSV1_2) {
            versions.push(&rustls::version::TLS12);
        }
        versions
    }
}
