#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporaryKeyStrength {
    Export512,
    Full1024,
}
