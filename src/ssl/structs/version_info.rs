use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub product: String,
    pub interface: String,
    pub library: String,
}
