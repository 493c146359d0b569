use crate::config::impls::engine_config::DEFAULT_SESSION_CACHE_TIMEOUT;
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::virtual_host_config::VirtualHostConfig;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::host_summary::HostSummary;
use crate::ssl::structs::private_key::PrivateKey;
use crate::ssl::structs::protocol_set::ProtocolSet;

impl HostConfig {
    /// Applies the per-host defaults; nothing is built yet.
    pub fn from_config(host: &VirtualHostConfig, engine: &EngineConfig) -> HostConfig {
        let enabled = host.enabled.unwrap_or(false);
        HostConfig {
            id: HostId::new(&host.server_name, &host.bind_address, enabled),
            server_name: host.server_name.clone(),
            bind_address: host.bind_address.clone(),
            source: host.source.clone(),
            enabled,
            protocols: ProtocolSet::from_versions(host.protocols.as_deref()),
            cipher_suite: host.cipher_suite.clone(),
            verify_mode: host.verify_client,
            verify_depth: host.verify_depth,
            certificate_files: host.certificate_files.clone(),
            key_files: host.key_files.clone(),
            ca_certificate_file: host.ca_certificate_file.clone(),
            ca_certificate_path: host.ca_certificate_path.clone(),
            ca_revocation_file: host.ca_revocation_file.clone(),
            ca_revocation_path: host.ca_revocation_path.clone(),
            certificate_chain_file: host.certificate_chain_file.clone(),
            session_cache_timeout: host
                .session_cache_timeout
                .or(engine.session_cache_timeout)
                .unwrap_or(DEFAULT_SESSION_CACHE_TIMEOUT),
            trace_state: host.trace_state.unwrap_or(false),
            context: None,
            certificates: [None, None],
            private_keys: [None, None],
            revocation_store: None,
        }
    }

    pub fn certificate(&self, slot: AlgorithmSlot) -> Option<&Certificate> {
        self.certificates[slot.index()].as_ref()
    }

    pub fn private_key(&self, slot: AlgorithmSlot) -> Option<&PrivateKey> {
        self.private_keys[slot.index()].as_ref()
    }

    pub fn has_certificates(&self) -> bool {
        self.certificates.iter().any(Option::is_some)
    }

    /// Everything this host owns is released; a second call finds nothing left.
    pub fn teardown(&mut self) {
        self.context = None;
        self.revocation_store = None;
        self.certificates = [None, None];
        self.private_keys = [None, None];
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_none()
            && self.revocation_store.is_none()
            && !self.has_certificates()
            && self.private_keys.iter().all(Option::is_none)
    }

    pub fn summary(&self) -> HostSummary {
        let context = self.context.as_deref();
        HostSummary {
            id: self.id.to_string(),
            bind_address: self.bind_address.clone(),
            enabled: self.enabled,
            protocols: context
                .map(|context| context.enabled_protocols())
                .unwrap_or(self.protocols)
                .names(),
            verify_mode: context.map(|context| format!("{:?}", context.verify().mode)),
            verify_depth: context.map(|context| context.verify().depth),
            client_ca_names: context.map(|context| context.client_ca_list().len()).unwrap_or(0),
            chain_certificates: context.map(|context| context.chain().len()).unwrap_or(0),
            revocation_lists: self.revocation_store.as_ref().map(|store| store.len()).unwrap_or(0),
            certificate_slots: AlgorithmSlot::ALL
                .into_iter()
                .filter(|slot| self.certificate(*slot).is_some())
                .map(|slot| slot.name().to_string())
                .collect(),
            session_cache: context.is_some_and(|context| context.session_cache().is_enabled()),
        }
    }
}
