#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingCollision {
    pub binding: String,
    pub first: String,
    pub second: String,
}
