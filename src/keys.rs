//! VRF key material.
//!
//! Keys follow Ed25519 (RFC 8032 §5.1.5): a 32-byte seed is hashed with
//! SHA-512, the low half is clamped into the secret scalar `x` and the high
//! half becomes the nonce key. The public key is `x * B`, so a VRF public key
//! is byte-identical to the Ed25519 verifying key of the same seed.

use core::fmt;

use curve25519_dalek::{
    edwards::EdwardsPoint,
    scalar::{clamp_integer, Scalar},
};
use log::{debug, error};
use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::{Digest, Sha512};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::{
    curve::{base_mul, decode_public_point, encode_point},
    errors::VrfError,
    ser::from_hex_exact,
    types::{PUBLIC_KEY_LEN, SECRET_KEY_LEN},
};

/// A VRF secret key seed. Zeroised on drop.
pub struct SecretKey(pub(crate) [u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Parse a 32-byte seed.
    ///
    /// The all-zero seed is refused with [`VrfError::InvalidSecretKey`]: it is
    /// what an uninitialised buffer looks like, never what a CSPRNG produces.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        let seed: [u8; SECRET_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| VrfError::length("secret key", SECRET_KEY_LEN, bytes.len()))?;
        let sk = Self(seed);
        if bool::from(sk.is_zero()) {
            debug!("rejected all-zero secret key");
            return Err(VrfError::InvalidSecretKey);
        }
        Ok(sk)
    }

    /// Parse a hex seed, with or without a `0x` prefix. The decoded
    /// intermediate buffer is wiped before returning.
    pub fn from_hex(s: &str) -> Result<Self, VrfError> {
        let seed = Zeroizing::new(from_hex_exact::<SECRET_KEY_LEN>(s, "secret key")?);
        Self::from_bytes(seed.as_slice())
    }

    /// Draw a fresh seed. A failing source is fatal; there is no fallback.
    pub fn generate<R>(csprng: &mut R) -> Result<Self, VrfError>
    where
        R: CryptoRng + RngCore,
    {
        let mut sk = Self([0u8; SECRET_KEY_LEN]);
        if let Err(e) = csprng.try_fill_bytes(&mut sk.0) {
            error!("randomness source failed: {e}");
            return Err(VrfError::RandomnessUnavailable);
        }
        if bool::from(sk.is_zero()) {
            error!("randomness source returned an all-zero seed");
            return Err(VrfError::RandomnessUnavailable);
        }
        Ok(sk)
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.0
    }

    fn is_zero(&self) -> Choice {
        self.0.ct_eq(&[0u8; SECRET_KEY_LEN])
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// The secret scalar and nonce key derived from a seed.
pub(crate) struct ExpandedSecretKey {
    pub(crate) key: Scalar,
    pub(crate) nonce: [u8; 32],
}

impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.nonce.zeroize();
    }
}

impl From<&SecretKey> for ExpandedSecretKey {
    fn from(secret_key: &SecretKey) -> Self {
        let mut hash = [0u8; 64];
        hash.copy_from_slice(&Sha512::digest(secret_key.as_bytes()));

        let mut lower = [0u8; 32];
        let mut upper = [0u8; 32];
        lower.copy_from_slice(&hash[..32]);
        upper.copy_from_slice(&hash[32..]);
        hash.zeroize();

        // Reducing the clamped integer mod L leaves x*P unchanged for every P
        // in the prime-order subgroup, which is where B and H live.
        let key = Scalar::from_bytes_mod_order(clamp_integer(lower));
        lower.zeroize();

        Self { key, nonce: upper }
    }
}

/// A validated VRF public key: canonical, on the curve, in the prime-order subgroup.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PublicKey {
    pub(crate) bytes: [u8; PUBLIC_KEY_LEN],
    pub(crate) point: EdwardsPoint,
}

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        let point = decode_public_point(bytes, "public key")?;
        Ok(Self { bytes: encode_point(&point), point })
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.bytes
    }

    #[inline]
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.bytes
    }
}

impl From<&ExpandedSecretKey> for PublicKey {
    fn from(expanded: &ExpandedSecretKey) -> Self {
        let point = base_mul(&expanded.key);
        Self { bytes: encode_point(&point), point }
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret_key: &SecretKey) -> Self {
        Self::from(&ExpandedSecretKey::from(secret_key))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.bytes))
    }
}

/// A secret key together with its public key.
#[derive(Debug)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl Keypair {
    /// Generate a keypair from the operating system's CSPRNG.
    pub fn generate() -> Result<Self, VrfError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a keypair from a caller-supplied CSPRNG.
    pub fn generate_with<R>(csprng: &mut R) -> Result<Self, VrfError>
    where
        R: CryptoRng + RngCore,
    {
        Ok(Self::from_secret(SecretKey::generate(csprng)?))
    }

    #[must_use]
    pub fn from_secret(secret: SecretKey) -> Self {
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        SecretKey::from_bytes(bytes).map(Self::from_secret)
    }

    #[must_use]
    pub const fn secret_key_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.secret.to_bytes()
    }

    #[must_use]
    pub const fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.public.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use rand_core::impls;

    #[test]
    fn rfc_vector_public_key_and_scalar() {
        let sk = SecretKey::from_bytes(&hex!(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"
        ))
        .unwrap();
        let expanded = ExpandedSecretKey::from(&sk);
        let x = hex!("307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f");
        assert_eq!(expanded.key, Scalar::from_bytes_mod_order(x));
        assert_eq!(
            PublicKey::from(&sk).to_bytes(),
            hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
        );
    }

    #[test]
    fn zero_seed_is_rejected() {
        assert_eq!(
            SecretKey::from_bytes(&[0u8; 32]).unwrap_err(),
            VrfError::InvalidSecretKey
        );
    }

    #[test]
    fn hex_seed_matches_byte_seed() {
        let seed_hex = "0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20";
        let from_hex = SecretKey::from_hex(seed_hex).unwrap();
        let from_bytes = SecretKey::from_bytes(&hex::decode(&seed_hex[2..]).unwrap()).unwrap();
        assert!(bool::from(from_hex.ct_eq(&from_bytes)));
        assert!(bool::from(SecretKey::from_hex(&seed_hex[2..]).unwrap().ct_eq(&from_bytes)));

        assert_eq!(
            SecretKey::from_hex(&"00".repeat(32)).unwrap_err(),
            VrfError::InvalidSecretKey
        );
        assert_eq!(
            SecretKey::from_hex("0x0102").unwrap_err(),
            VrfError::length("secret key", 32, 2)
        );
    }

    #[test]
    fn wrong_length_seed_is_an_encoding_error() {
        assert_eq!(
            SecretKey::from_bytes(&[1u8; 31]).unwrap_err(),
            VrfError::length("secret key", 32, 31)
        );
    }

    #[test]
    fn generated_keys_differ() {
        let a = Keypair::generate().unwrap();
        let b = Keypair::generate().unwrap();
        assert!(!bool::from(a.secret.ct_eq(&b.secret)));
        assert_ne!(a.public, b.public);
        assert_eq!(PublicKey::from_bytes(&a.public_key_bytes()).unwrap(), a.public);
    }

    #[test]
    fn debug_hides_secret() {
        let kp = Keypair::from_secret_bytes(&[7u8; 32]).unwrap();
        let s = format!("{kp:?}");
        assert!(s.contains("SecretKey(..)"));
        assert!(!s.contains("0707"));
    }

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            impls::next_u32_via_fill(self)
        }
        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_fill(self)
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::from(core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap()))
        }
    }
    impl CryptoRng for BrokenRng {}

    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            dest.fill(0);
            Ok(())
        }
    }
    impl CryptoRng for ZeroRng {}

    #[test]
    fn failing_rng_is_fatal() {
        assert_eq!(
            Keypair::generate_with(&mut BrokenRng).unwrap_err(),
            VrfError::RandomnessUnavailable
        );
        assert_eq!(
            Keypair::generate_with(&mut ZeroRng).unwrap_err(),
            VrfError::RandomnessUnavailable
        );
    }
}
