use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::no_mutex::NoMutex;
use crate::ssl::traits::engine_mutex::EngineMutex;

impl EngineMutex for NoMutex {
    fn initialize(&self) -> Result<(), SslError> {
        Ok(())
    }

    fn reinit_after_fork(&self) -> Result<(), SslError> {
        Ok(())
    }

    fn kill(&self) {}
}
