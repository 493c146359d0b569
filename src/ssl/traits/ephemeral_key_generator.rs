use rand::rngs::StdRng;
use rsa::RsaPrivateKey;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::dh_params::DhParams;

pub trait EphemeralKeyGenerator: Send + Sync {
    fn generate_rsa(&self, rng: &mut StdRng, bits: usize) -> Result<RsaPrivateKey, SslError>;

    fn generate_dh(&self, rng: &mut StdRng, bits: usize) -> Result<DhParams, SslError>;
}
