#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

//! relief-ecvrf
//!
//! Verifiable random function for the zk-relief report flow: a reporter's
//! secret key and an input string yield a proof and a 64-byte output that
//! anyone holding the public key can check, plus the parameter triple the
//! on-chain verifier consumes.

// Fixed cryptographic choices:
// - Suite: ECVRF-EDWARDS25519-SHA512-TAI (RFC 9381, suite string 0x03)
// - Keys: Ed25519 seeds (RFC 8032 §5.1.5), 32-byte compressed public keys
// - Proof: Gamma(32) || c(16) || s(32) = 80 bytes
// - Output: SHA-512 of the cofactor-cleared Gamma, 64 bytes

pub mod types;
pub mod errors;
pub mod curve;
pub mod keys;
mod proof;
mod prove;
mod verify;
pub mod vrf;
pub mod contract;
pub mod ser;
pub mod api;

pub use types::*;
pub use errors::{DecodeError, VrfError};
pub use keys::{Keypair, PublicKey, SecretKey};
pub use vrf::{mk_verifier, Vrf, VrfVerifier};
pub use contract::{ContractParameters, ContractParametersHex};
pub use api::{
    derive_public_key, generate_contract_parameters, generate_keypair, is_valid_proof, proof_to_hash,
    prove, verify,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
