use crate::{
    errors::VrfError,
    keys::{Keypair, PublicKey},
    types::{VrfOutput, VrfProof, PUBLIC_KEY_LEN},
};

/// Verification side of the VRF.
pub trait VrfVerifier {
    /// Verify proof π on input `alpha`, returning the 64-byte output on success.
    ///
    /// # Errors
    /// `InvalidEncoding` for malformed proofs, `VerificationFailed` for wrong ones.
    fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfOutput, VrfError>;

    /// Boolean form of [`VrfVerifier::verify`].
    fn is_valid(&self, alpha: &[u8], proof: &VrfProof) -> bool {
        self.verify(alpha, proof).is_ok()
    }
}

/// A VRF instance that can also prove.
pub trait Vrf: VrfVerifier {
    /// Generate a proof for `alpha` together with its output.
    ///
    /// # Errors
    /// Only the (practically unreachable) hash-to-curve exhaustion.
    fn prove(&self, alpha: &[u8]) -> Result<(VrfProof, VrfOutput), VrfError>;

    fn public_key(&self) -> [u8; PUBLIC_KEY_LEN];
}

impl VrfVerifier for PublicKey {
    fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfOutput, VrfError> {
        Self::verify(self, alpha, &proof.0)
    }
}

impl VrfVerifier for Keypair {
    fn verify(&self, alpha: &[u8], proof: &VrfProof) -> Result<VrfOutput, VrfError> {
        self.public.verify(alpha, &proof.0)
    }
}

impl Vrf for Keypair {
    fn prove(&self, alpha: &[u8]) -> Result<(VrfProof, VrfOutput), VrfError> {
        Self::prove(self, alpha)
    }

    fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.public_key_bytes()
    }
}

/// Build a verifier from raw public key bytes.
///
/// # Errors
/// `InvalidEncoding` if the bytes are not a valid VRF public key.
pub fn mk_verifier(pk_bytes: &[u8]) -> Result<PublicKey, VrfError> {
    PublicKey::from_bytes(pk_bytes)
}
