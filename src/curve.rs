//! edwards25519 primitives used by the ECVRF suite.
//!
//! Points travel as 32-byte compressed Edwards Y encodings (RFC 8032 §5.1.2).
//! Decoding is strict: the bytes must decompress, and must be the canonical
//! encoding of the resulting point, so that every accepted point has exactly
//! one byte representation. Scalars are little-endian integers below the
//! group order `L`.

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    scalar::Scalar,
    traits::IsIdentity,
};
use log::trace;
use sha2::{Digest, Sha512};

use crate::{
    errors::{DecodeError, VrfError},
    types::{
        CHALLENGE_LEN, DST_BACK, DST_CHALLENGE_FRONT, DST_ENCODE_TO_CURVE_FRONT, POINT_LEN,
        SCALAR_LEN, SUITE_STRING,
    },
};

/// Decode a 32-byte compressed point, rejecting non-canonical encodings.
pub fn decode_point(bytes: &[u8], what: &'static str) -> Result<EdwardsPoint, VrfError> {
    let arr: [u8; POINT_LEN] = bytes
        .try_into()
        .map_err(|_| VrfError::length(what, POINT_LEN, bytes.len()))?;
    let point = CompressedEdwardsY(arr)
        .decompress()
        .ok_or(DecodeError::PointDecompression(what))?;
    if point.compress().to_bytes() != arr {
        return Err(DecodeError::NonCanonicalPoint(what).into());
    }
    Ok(point)
}

/// Like [`decode_point`], but also rejects any point with a small-order
/// component: the point must be a non-identity element of the prime-order
/// subgroup. Every honest key `x * B` passes.
pub fn decode_public_point(bytes: &[u8], what: &'static str) -> Result<EdwardsPoint, VrfError> {
    let point = decode_point(bytes, what)?;
    if point.is_small_order() || !point.is_torsion_free() {
        return Err(DecodeError::SmallOrderPoint(what).into());
    }
    Ok(point)
}

#[inline]
#[must_use]
pub fn encode_point(point: &EdwardsPoint) -> [u8; POINT_LEN] {
    point.compress().to_bytes()
}

/// Decode a 32-byte scalar that must already be reduced mod `L`.
pub fn decode_scalar(bytes: &[u8], what: &'static str) -> Result<Scalar, VrfError> {
    let arr: [u8; SCALAR_LEN] = bytes
        .try_into()
        .map_err(|_| VrfError::length(what, SCALAR_LEN, bytes.len()))?;
    Option::<Scalar>::from(Scalar::from_canonical_bytes(arr))
        .ok_or_else(|| DecodeError::NonCanonicalScalar(what).into())
}

#[inline]
#[must_use]
pub fn scalar_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    scalar * point
}

/// `scalar * B` using the precomputed basepoint table.
#[inline]
#[must_use]
pub fn base_mul(scalar: &Scalar) -> EdwardsPoint {
    EdwardsPoint::mul_base(scalar)
}

/// `ECVRF_encode_to_curve_try_and_increment` (RFC 9381 §5.4.1.1) with the
/// encoded public key as salt.
///
/// Each counter value succeeds independently with probability about one half,
/// so running out of the 256 one-byte counters does not happen in practice.
pub fn hash_to_curve(public_key: &[u8; POINT_LEN], alpha: &[u8]) -> Result<EdwardsPoint, VrfError> {
    let prefix = Sha512::new()
        .chain_update([SUITE_STRING, DST_ENCODE_TO_CURVE_FRONT])
        .chain_update(public_key)
        .chain_update(alpha);
    for ctr in 0..=u8::MAX {
        let digest = prefix.clone().chain_update([ctr, DST_BACK]).finalize();
        let mut candidate = [0u8; POINT_LEN];
        candidate.copy_from_slice(&digest[..POINT_LEN]);
        let Some(point) = decode_candidate(candidate) else {
            continue;
        };
        let h = point.mul_by_cofactor();
        if !h.is_identity() {
            trace!("hash_to_curve: valid point at ctr={ctr}");
            return Ok(h);
        }
    }
    Err(VrfError::HashToCurveFailed)
}

// RFC 8032 decoding of a hash candidate: invalid and non-canonical strings are skipped.
fn decode_candidate(bytes: [u8; POINT_LEN]) -> Option<EdwardsPoint> {
    let point = CompressedEdwardsY(bytes).decompress()?;
    (point.compress().to_bytes() == bytes).then_some(point)
}

/// `ECVRF_challenge_generation` (RFC 9381 §5.4.3): SHA-512 over the encoded
/// points, truncated to the first 16 bytes and read little-endian.
#[must_use]
pub fn challenge(points: &[&EdwardsPoint; 5]) -> Scalar {
    let mut h = Sha512::new().chain_update([SUITE_STRING, DST_CHALLENGE_FRONT]);
    for p in points {
        h.update(encode_point(p));
    }
    h.update([DST_BACK]);
    let digest = h.finalize();
    let mut c_bytes = [0u8; SCALAR_LEN];
    c_bytes[..CHALLENGE_LEN].copy_from_slice(&digest[..CHALLENGE_LEN]);
    Scalar::from_bytes_mod_order(c_bytes)
}

/// `ECVRF_nonce_generation_RFC8032` (RFC 9381 §5.4.2.2): the nonce is fixed
/// by the secret nonce key and the encoded `H`, so one key never reuses a
/// nonce across different inputs.
#[must_use]
pub fn nonce(nonce_key: &[u8; 32], h_bytes: &[u8; POINT_LEN]) -> Scalar {
    let digest = Sha512::new()
        .chain_update(nonce_key)
        .chain_update(h_bytes)
        .finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_mod_order_wide(&wide)
}
