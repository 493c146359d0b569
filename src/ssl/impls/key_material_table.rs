use log::debug;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::host_config::HostConfig;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::structs::key_material_table::KeyMaterialTable;
use crate::ssl::traits::key_material_source::KeyMaterialSource;

impl KeyMaterialTable {
    pub fn new() -> KeyMaterialTable {
        KeyMaterialTable::default()
    }

    /// Asks the source for every slot of every enabled host.
    pub fn populate(source: &dyn KeyMaterialSource, hosts: &[HostConfig]) -> Result<KeyMaterialTable, SslError> {
        let mut table = KeyMaterialTable::new();
        for host in hosts.iter().filter(|host| host.enabled) {
            for slot in AlgorithmSlot::ALL {
                if let Some(material) = source.resolve(host, slot)? {
                    debug!("[SSL] {}: {} key material available", host.id, slot);
                    table.insert(host.id.clone(), slot, material);
                }
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, host: HostId, slot: AlgorithmSlot, material: KeyMaterial) {
        self.entries.insert((host, slot), material);
    }

    pub fn resolve(&self, host: &HostId, slot: AlgorithmSlot) -> Option<&KeyMaterial> {
        self.entries.get(&(host.clone(), slot))
    }

    /// Empty byte strings count as absent.
    pub fn certificate(&self, host: &HostId, slot: AlgorithmSlot) -> Option<&[u8]> {
        self.resolve(host, slot)
            .map(|material| material.certificate.as_slice())
            .filter(|certificate| !certificate.is_empty())
    }

    pub fn private_key(&self, host: &HostId, slot: AlgorithmSlot) -> Option<&[u8]> {
        self.resolve(host, slot)
            .map(|material| material.private_key.as_slice())
            .filter(|key| !key.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
