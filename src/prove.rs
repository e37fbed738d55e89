use log::trace;

use crate::{
    curve::{base_mul, challenge, encode_point, hash_to_curve, nonce, scalar_mul},
    errors::VrfError,
    keys::{ExpandedSecretKey, Keypair, PublicKey, SecretKey},
    proof::Proof,
    types::{VrfOutput, VrfProof},
};

impl ExpandedSecretKey {
    /// `ECVRF_prove` (RFC 9381 §5.1).
    pub(crate) fn prove(&self, public_key: &PublicKey, alpha: &[u8]) -> Result<Proof, VrfError> {
        let x = &self.key;
        let h = hash_to_curve(public_key.as_bytes(), alpha)?;
        let h_bytes = encode_point(&h);
        let gamma = scalar_mul(&h, x);
        let k = nonce(&self.nonce, &h_bytes);
        let k_b = base_mul(&k);
        let k_h = scalar_mul(&h, &k);
        let c = challenge(&[&public_key.point, &h, &gamma, &k_b, &k_h]);
        let s = k + c * x;
        trace!("prove: alpha_len={}", alpha.len());
        Ok(Proof { gamma, c, s })
    }
}

impl SecretKey {
    /// Prove `alpha` under this key. The public key is re-derived from the seed.
    pub fn prove(&self, alpha: &[u8]) -> Result<VrfProof, VrfError> {
        let expanded = ExpandedSecretKey::from(self);
        let public_key = PublicKey::from(&expanded);
        Ok(expanded.prove(&public_key, alpha)?.to_bytes())
    }
}

impl Keypair {
    /// Prove `alpha`, returning the proof and its output.
    pub fn prove(&self, alpha: &[u8]) -> Result<(VrfProof, VrfOutput), VrfError> {
        let proof = ExpandedSecretKey::from(&self.secret).prove(&self.public, alpha)?;
        Ok((proof.to_bytes(), proof.to_hash()))
    }
}
