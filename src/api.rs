//! Byte-in, byte-out surface for embedding layers (WASM bindings, HTTP glue).
//!
//! Every argument is a raw buffer. Wrong lengths and malformed contents are
//! rejected with [`VrfError::InvalidEncoding`], never truncated or padded.

use crate::{
    contract::ContractParameters,
    errors::VrfError,
    keys::{Keypair, PublicKey, SecretKey},
    types::{VrfOutput, VrfProof, PUBLIC_KEY_LEN},
};

/// Generate a keypair from the OS randomness source.
///
/// # Errors
/// `RandomnessUnavailable` if the source fails.
pub fn generate_keypair() -> Result<Keypair, VrfError> {
    Keypair::generate()
}

/// The public key belonging to a 32-byte secret key.
///
/// # Errors
/// `InvalidEncoding` on wrong length, `InvalidSecretKey` on the zero seed.
pub fn derive_public_key(secret_key: &[u8]) -> Result<[u8; PUBLIC_KEY_LEN], VrfError> {
    Ok(PublicKey::from(&SecretKey::from_bytes(secret_key)?).to_bytes())
}

/// Deterministic 80-byte proof for `alpha`.
///
/// # Errors
/// `InvalidEncoding` on wrong length, `InvalidSecretKey` on the zero seed.
pub fn prove(secret_key: &[u8], alpha: &[u8]) -> Result<VrfProof, VrfError> {
    SecretKey::from_bytes(secret_key)?.prove(alpha)
}

/// Verify `proof` for `alpha` under `public_key` and return the output.
///
/// # Errors
/// `InvalidEncoding` if the key or proof does not decode, `VerificationFailed`
/// if the proof is wrong.
pub fn verify(public_key: &[u8], alpha: &[u8], proof: &[u8]) -> Result<VrfOutput, VrfError> {
    PublicKey::from_bytes(public_key)?.verify(alpha, proof)
}

/// `true` iff [`verify`] succeeds.
#[must_use]
pub fn is_valid_proof(public_key: &[u8], alpha: &[u8], proof: &[u8]) -> bool {
    verify(public_key, alpha, proof).is_ok()
}

pub use crate::verify::proof_to_hash;

/// Prove once and return the `(public_key, proof, output)` triple.
///
/// # Errors
/// As [`prove`].
pub fn generate_contract_parameters(
    secret_key: &[u8],
    alpha: &[u8],
) -> Result<ContractParameters, VrfError> {
    let keypair = Keypair::from_secret_bytes(secret_key)?;
    ContractParameters::generate(&keypair, alpha)
}
