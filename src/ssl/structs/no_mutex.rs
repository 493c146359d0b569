#[derive(Debug, Clone, Copy, Default)]
pub struct NoMutex;
