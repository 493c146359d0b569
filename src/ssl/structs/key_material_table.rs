use std::collections::HashMap;
use crate::ssl::enums::algorithm_slot::AlgorithmSlot;
use crate::ssl::structs::host_id::HostId;
use crate::ssl::structs::key_material::KeyMaterial;

#[derive(Debug, Clone, Default)]
pub struct KeyMaterialTable {
    pub(crate) entries: HashMap<(HostId, AlgorithmSlot), KeyMaterial>,
}
