use std::fmt;
use crate::common::common::split_bind_address;
use crate::ssl::structs::host_id::HostId;

impl HostId {
    /// Without a parsable port the conventional one for the host's mode is used.
    pub fn new(server_name: &str, bind_address: &str, enabled: bool) -> HostId {
        let port = match split_bind_address(bind_address) {
            Some((_, port)) => port,
            None if enabled => 443,
            None => 80,
        };
        HostId(format!("{}:{}", server_name, port))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
