use crate::ssl::enums::ssl_error::SslError;

pub trait EngineMutex: Send + Sync {
    fn initialize(&self) -> Result<(), SslError>;

    /// Called in a freshly forked child before it serves connections.
    fn reinit_after_fork(&self) -> Result<(), SslError>;

    fn kill(&self);
}
