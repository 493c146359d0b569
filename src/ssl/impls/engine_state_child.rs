use log::debug;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::seed_random;
use crate::ssl::structs::engine_state::EngineState;

const CHILD_SEED_BYTES: usize = 32;

impl EngineState {
    /// Call in a freshly forked worker before it serves connections.
    pub fn init_child(&mut self) -> Result<(), SslError> {
        self.pid = std::process::id();
        self.rng = seed_random(CHILD_SEED_BYTES);
        self.mutex.reinit_after_fork()?;
        debug!("[SSL] child {} initialized", self.pid);
        Ok(())
    }
}
