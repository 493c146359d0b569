use num_bigint_dig::BigUint;
use crate::ssl::structs::dh_params::DhParams;

impl DhParams {
    pub fn bits(&self) -> usize {
        self.p.bits()
    }

    /// `g` lies in `[2, p-1)` and generates the order-`q` subgroup.
    pub fn is_consistent(&self) -> bool {
        let one = BigUint::from(1u32);
        let two = BigUint::from(2u32);
        let p_minus_one = &self.p - &one;
        if self.g < two || self.g >= p_minus_one {
            return false;
        }
        if &p_minus_one % &self.q != BigUint::from(0u32) {
            return false;
        }
        self.g.modpow(&self.q, &self.p) == one
    }
}
