use log::{debug, info};
use crate::ssl::structs::engine_state::EngineState;
use crate::ssl::structs::host_config::HostConfig;

impl EngineState {
    /// Releases the engine and every host's material. Safe to call repeatedly; never fails.
    pub fn kill_module(&mut self, hosts: &mut [HostConfig]) {
        if let Some(cache) = self.session_cache.take() {
            cache.kill();
            debug!("[SSL] session cache released");
        }

        self.temporary_keys.free();

        for host in hosts.iter_mut() {
            host.teardown();
        }

        self.mutex.kill();
        self.key_material.clear();
        if self.version.take().is_some() {
            info!("[SSL] Teardown: released SSL engine state");
        }
    }
}
