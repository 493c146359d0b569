use log::debug;
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt, RandPrime};
use rand::rngs::StdRng;
use rsa::RsaPrivateKey;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::dh_params::DhParams;
use crate::ssl::structs::system_key_generator::SystemKeyGenerator;
use crate::ssl::traits::ephemeral_key_generator::EphemeralKeyGenerator;

const DH_SUBGROUP_BITS: usize = 160;
const PRIMALITY_ROUNDS: usize = 20;

impl Default for SystemKeyGenerator {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl SystemKeyGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    fn dh_failure(bits: usize) -> SslError {
        SslError::TemporaryKey { kind: String::from("DH parameters"), bits }
    }
}

impl EphemeralKeyGenerator for SystemKeyGenerator {
    fn generate_rsa(&self, rng: &mut StdRng, bits: usize) -> Result<RsaPrivateKey, SslError> {
        RsaPrivateKey::new(rng, bits).map_err(|error| {
            debug!("[TMPKEY] RSA generation failed: {}", error);
            SslError::TemporaryKey { kind: String::from("RSA private key"), bits }
        })
    }

    /// X9.42 style parameters: `p = 2kq + 1` with a 160-bit prime `q`.
    fn generate_dh(&self, rng: &mut StdRng, bits: usize) -> Result<DhParams, SslError> {
        if bits <= DH_SUBGROUP_BITS + 1 {
            return Err(Self::dh_failure(bits));
        }
        let one = BigUint::from(1u32);
        let q = rng.gen_prime(DH_SUBGROUP_BITS);
        let two_q = &q << 1usize;
        let top_bit = &one << (bits - 1);

        for _ in 0..self.max_attempts {
            let candidate = rng.gen_biguint(bits) | &top_bit;
            let remainder = &candidate % &two_q;
            let p = candidate - remainder + &one;
            if p.bits() != bits || !probably_prime(&p, PRIMALITY_ROUNDS) {
                continue;
            }
            let exponent = (&p - &one) / &q;
            for h in 2u32..64 {
                let g = BigUint::from(h).modpow(&exponent, &p);
                if g != one {
                    return Ok(DhParams { p, q, g });
                }
            }
        }
        Err(Self::dh_failure(bits))
    }
}
