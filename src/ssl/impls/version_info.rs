use std::fmt;
use crate::ssl::structs::version_info::VersionInfo;

pub const INTERFACE: &str = "rustls/0.23";

impl VersionInfo {
    pub fn current(library: &str) -> VersionInfo {
        VersionInfo {
            product: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            interface: String::from(INTERFACE),
            library: library.to_string(),
        }
    }

    /// Single string for external version reporting.
    pub fn components(&self) -> String {
        format!("{} {} {}", self.product, self.interface, self.library)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Server: {}, Interface: {}, Library: {}", self.product, self.interface, self.library)
    }
}
