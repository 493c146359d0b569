use num_bigint_dig::BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhParams {
    pub p: BigUint,
    pub q: BigUint,
    pub g: BigUint,
}
