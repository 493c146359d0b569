use rand::rngs::StdRng;
use crate::ssl::structs::engine_state::EngineState;

impl EngineState {
    pub fn version(&self) -> Option<String> {
        self.version.as_ref().map(|version| version.components())
    }

    /// Engine generator; reseeded in every child.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
