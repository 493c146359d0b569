#[derive(Debug, Clone, Copy)]
pub struct SystemKeyGenerator {
    pub(crate) max_attempts: usize,
}
