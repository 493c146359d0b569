use crate::ssl::structs::binding_collision::BindingCollision;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub port_warnings: Vec<String>,
    pub collisions: Vec<BindingCollision>,
}
