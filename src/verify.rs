use curve25519_dalek::edwards::EdwardsPoint;
use log::debug;

use crate::{
    curve::{challenge, hash_to_curve, scalar_mul},
    errors::VrfError,
    keys::PublicKey,
    proof::Proof,
    types::VrfOutput,
};

impl PublicKey {
    /// `ECVRF_verify` (RFC 9381 §5.3) with key validation. Returns `beta` when
    /// the proof is valid for `alpha` under this key.
    pub fn verify(&self, alpha: &[u8], proof: &[u8]) -> Result<VrfOutput, VrfError> {
        let pi = Proof::from_bytes(proof)?;
        self.verify_decoded(alpha, &pi)?;
        Ok(pi.to_hash())
    }

    #[allow(clippy::many_single_char_names)]
    pub(crate) fn verify_decoded(&self, alpha: &[u8], pi: &Proof) -> Result<(), VrfError> {
        let Proof { gamma, c, s } = pi;
        let y = &self.point;
        let h = hash_to_curve(&self.bytes, alpha)?;

        // Only public values from here on, so variable time is fine.
        let u = EdwardsPoint::vartime_double_scalar_mul_basepoint(&-c, y, s); // s*B - c*Y = k*B
        let v = scalar_mul(&h, s) - scalar_mul(gamma, c); // s*H - c*Gamma = k*H

        if challenge(&[y, &h, gamma, &u, &v]) == *c {
            Ok(())
        } else {
            debug!("VRF proof rejected for alpha_len={}", alpha.len());
            Err(VrfError::VerificationFailed)
        }
    }
}

/// Recover `beta` from a proof without verifying it. Only for proofs the
/// caller already trusts.
pub fn proof_to_hash(proof: &[u8]) -> Result<VrfOutput, VrfError> {
    Ok(Proof::from_bytes(proof)?.to_hash())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys::Keypair, types::PROOF_LEN};

    #[test]
    fn prove_then_verify() {
        let kp = Keypair::generate().unwrap();
        let (proof, out) = kp.prove(b"test message").unwrap();
        assert_eq!(kp.public.verify(b"test message", &proof.0).unwrap(), out);
        assert_eq!(proof_to_hash(&proof.0).unwrap(), out);
    }

    #[test]
    fn zero_proof_is_rejected() {
        let kp = Keypair::generate().unwrap();
        // Gamma = 0x00.. decodes (y = 0 is on the curve), so this fails the equation, not the decode.
        let err = kp.public.verify(b"test input", &[0u8; PROOF_LEN]).unwrap_err();
        assert!(matches!(err, VrfError::VerificationFailed | VrfError::InvalidEncoding(_)));
    }

    #[test]
    fn bit_flips_in_c_and_s_are_rejected() {
        let kp = Keypair::from_secret_bytes(&[5u8; 32]).unwrap();
        let (proof, _) = kp.prove(b"test input").unwrap();
        for byte in 32..PROOF_LEN {
            for bit in 0..8 {
                let mut bad = proof.0;
                bad[byte] ^= 1 << bit;
                assert!(
                    kp.public.verify(b"test input", &bad).is_err(),
                    "flip at byte {byte} bit {bit} accepted"
                );
            }
        }
    }

    #[test]
    fn wrong_length_proof_is_an_encoding_error() {
        let kp = Keypair::generate().unwrap();
        for len in [0usize, 1, 79, 81, 100] {
            assert_eq!(
                kp.public.verify(b"x", &vec![0u8; len]).unwrap_err(),
                VrfError::length("proof", PROOF_LEN, len)
            );
        }
    }
}
