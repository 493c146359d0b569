/// Reads unencrypted PEM or DER certificate/key files listed on each host.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileKeyMaterialSource;
