use thiserror::Error;

/// Why a byte string failed to decode into a key, point, scalar or proof.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum DecodeError {
    #[error("{what} must be {expected} bytes, got {got}")]
    Length { what: &'static str, expected: usize, got: usize },

    #[error("{0} is not a point on edwards25519")]
    PointDecompression(&'static str),

    #[error("{0} is not the canonical encoding of its point")]
    NonCanonicalPoint(&'static str),

    #[error("{0} has a small-order component")]
    SmallOrderPoint(&'static str),

    #[error("{0} is not a canonical scalar (must be below the group order)")]
    NonCanonicalScalar(&'static str),

    #[error("{0} is not valid hex")]
    Hex(&'static str),
}

/// Errors produced by key handling, proving and verification.
///
/// `VerificationFailed` is an ordinary negative answer for a well-formed but
/// wrong proof. It is final; re-running verification cannot change it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum VrfError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] DecodeError),

    #[error("secret key is not usable for key derivation")]
    InvalidSecretKey,

    #[error("VRF verification failed")]
    VerificationFailed,

    #[error("secure randomness source unavailable")]
    RandomnessUnavailable,

    #[error("hash-to-curve found no valid point in 256 attempts")]
    HashToCurveFailed,
}

impl VrfError {
    /// Shorthand for a length mismatch on `what`.
    #[must_use]
    pub const fn length(what: &'static str, expected: usize, got: usize) -> Self {
        Self::InvalidEncoding(DecodeError::Length { what, expected, got })
    }

    /// True for errors caused by malformed caller input.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_error_message_names_the_field() {
        let e = VrfError::length("proof", 80, 79);
        assert_eq!(e.to_string(), "invalid encoding: proof must be 80 bytes, got 79");
        assert!(e.is_encoding());
    }

    #[test]
    fn decode_error_converts_into_vrf_error() {
        let e: VrfError = DecodeError::SmallOrderPoint("public key").into();
        assert_eq!(e, VrfError::InvalidEncoding(DecodeError::SmallOrderPoint("public key")));
        assert!(!VrfError::VerificationFailed.is_encoding());
    }
}
