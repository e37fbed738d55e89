use core::fmt;

use crate::errors::VrfError;

pub const SUITE_NAME: &str = "ECVRF-EDWARDS25519-SHA512-TAI";
pub const SECRET_KEY_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const POINT_LEN: usize = 32;
pub const SCALAR_LEN: usize = 32;
pub const CHALLENGE_LEN: usize = 16;                                   // c is truncated to n = 16 bytes
pub const PROOF_LEN: usize = POINT_LEN + CHALLENGE_LEN + SCALAR_LEN;  // π = Γ(32)||c(16)||s(32)
pub const OUTPUT_LEN: usize = 64;                                      // β = SHA-512 digest

// RFC 9381 §5.5 suite string and domain separators.
pub const SUITE_STRING: u8 = 0x03;
pub const DST_ENCODE_TO_CURVE_FRONT: u8 = 0x01;
pub const DST_CHALLENGE_FRONT: u8 = 0x02;
pub const DST_PROOF_TO_HASH_FRONT: u8 = 0x03;
pub const DST_BACK: u8 = 0x00;

/// Serialized proof `Gamma || c || s`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct VrfProof(pub [u8; PROOF_LEN]);

/// VRF output `beta`, a function of Gamma only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct VrfOutput(pub [u8; OUTPUT_LEN]);

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr, $name:literal) => {
        impl TryFrom<&[u8]> for $t {
            type Error = VrfError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                let arr: [u8; $len] = b
                    .try_into()
                    .map_err(|_| VrfError::length($name, $len, b.len()))?;
                Ok(Self(arr))
            }
        }

        impl AsRef<[u8]> for $t {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($name, "({})"), hex::encode(self.0))
            }
        }
    };
}
impl_tryfrom_slice!(VrfProof, PROOF_LEN, "proof");
impl_tryfrom_slice!(VrfOutput, OUTPUT_LEN, "output");

impl VrfProof {
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PROOF_LEN] {
        self.0
    }

    /// The encoded Gamma point.
    #[must_use]
    pub fn gamma_bytes(&self) -> &[u8] {
        &self.0[..POINT_LEN]
    }
}

impl VrfOutput {
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; OUTPUT_LEN] {
        self.0
    }

    /// Constant-time comparison, for checking a claimed output against a recovered one.
    #[must_use]
    pub fn ct_eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.0.ct_eq(&other.0).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_length_is_80() {
        assert_eq!(PROOF_LEN, 80);
        assert_eq!(OUTPUT_LEN, 64);
    }

    #[test]
    fn tryfrom_rejects_wrong_lengths() {
        for len in [0usize, 1, 79, 81, 160] {
            let buf = vec![0u8; len];
            assert_eq!(
                VrfProof::try_from(buf.as_slice()).unwrap_err(),
                VrfError::length("proof", PROOF_LEN, len)
            );
        }
        assert!(VrfProof::try_from([7u8; PROOF_LEN].as_slice()).is_ok());
        assert!(VrfOutput::try_from([7u8; 63].as_slice()).is_err());
    }

    #[test]
    fn debug_is_hex() {
        let out = VrfOutput([0xab; OUTPUT_LEN]);
        let s = format!("{out:?}");
        assert!(s.starts_with("output(abab"));
    }

    #[test]
    fn output_ct_eq() {
        let a = VrfOutput([1; OUTPUT_LEN]);
        let mut b = a;
        assert!(a.ct_eq(&b));
        b.0[63] ^= 1;
        assert!(!a.ct_eq(&b));
    }
}
