//! Decoded proof `(Gamma, c, s)` and its 80-byte wire form.

use curve25519_dalek::{edwards::EdwardsPoint, scalar::Scalar};
use sha2::{Digest, Sha512};

use crate::{
    curve::{decode_point, decode_scalar, encode_point},
    errors::VrfError,
    types::{
        VrfOutput, VrfProof, CHALLENGE_LEN, DST_BACK, DST_PROOF_TO_HASH_FRONT, OUTPUT_LEN,
        POINT_LEN, PROOF_LEN, SCALAR_LEN, SUITE_STRING,
    },
};

const C_OFFSET: usize = POINT_LEN;
const S_OFFSET: usize = POINT_LEN + CHALLENGE_LEN;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Proof {
    pub(crate) gamma: EdwardsPoint,
    pub(crate) c: Scalar,
    pub(crate) s: Scalar,
}

impl Proof {
    /// `ECVRF_decode_proof` (RFC 9381 §5.4.4). Gamma must be a canonical
    /// point and `s` must be below the group order.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        if bytes.len() != PROOF_LEN {
            return Err(VrfError::length("proof", PROOF_LEN, bytes.len()));
        }
        let gamma = decode_point(&bytes[..C_OFFSET], "proof gamma")?;
        let mut c_bytes = [0u8; SCALAR_LEN];
        c_bytes[..CHALLENGE_LEN].copy_from_slice(&bytes[C_OFFSET..S_OFFSET]);
        // A 128-bit integer is always below L.
        let c = Scalar::from_bytes_mod_order(c_bytes);
        let s = decode_scalar(&bytes[S_OFFSET..], "proof s")?;
        Ok(Self { gamma, c, s })
    }

    pub(crate) fn to_bytes(&self) -> VrfProof {
        let mut out = [0u8; PROOF_LEN];
        out[..C_OFFSET].copy_from_slice(&encode_point(&self.gamma));
        out[C_OFFSET..S_OFFSET].copy_from_slice(&self.c.as_bytes()[..CHALLENGE_LEN]);
        out[S_OFFSET..].copy_from_slice(self.s.as_bytes());
        VrfProof(out)
    }

    /// `ECVRF_proof_to_hash` (RFC 9381 §5.2).
    pub(crate) fn to_hash(&self) -> VrfOutput {
        let digest = Sha512::new()
            .chain_update([SUITE_STRING, DST_PROOF_TO_HASH_FRONT])
            .chain_update(encode_point(&self.gamma.mul_by_cofactor()))
            .chain_update([DST_BACK])
            .finalize();
        let mut out = [0u8; OUTPUT_LEN];
        out.copy_from_slice(&digest);
        VrfOutput(out)
    }
}
