use crate::ssl::enums::error_severity::ErrorSeverity;
use crate::ssl::enums::ssl_error::SslError;

impl SslError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SslError::MutexInit(_) => ErrorSeverity::blocking,
            _ => ErrorSeverity::fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::fatal
    }
}
