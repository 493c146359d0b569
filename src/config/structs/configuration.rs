use serde::{Deserialize, Serialize};
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::virtual_host_config::VirtualHostConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub engine: EngineConfig,
    #[serde(default)]
    pub virtual_hosts: Vec<VirtualHostConfig>,
}
