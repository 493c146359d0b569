use crate::ssl::enums::ssl_error::SslError;

pub trait FatalHandler: Send + Sync {
    fn die(&self, error: &SslError) -> !;
}
