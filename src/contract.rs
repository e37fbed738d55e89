//! The `(public_key, proof, output)` triple handed to an on-chain verifier.
//!
//! The triple is raw bytes. How a given contract ABI wants them (byte order,
//! `0x` prefixes, vector wrapping) is decided by the caller; this module only
//! offers the canonical blob ([`crate::ser`]) and a `0x`-hex rendering.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::VrfError,
    keys::{Keypair, PublicKey},
    ser::{decode_contract_parameters, encode_contract_parameters, from_hex_exact, to_prefixed_hex, CONTRACT_BLOB_LEN},
    types::{VrfOutput, VrfProof, PUBLIC_KEY_LEN},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractParameters {
    pub public_key: [u8; PUBLIC_KEY_LEN],
    pub proof: VrfProof,
    pub output: VrfOutput,
}

/// [`ContractParameters`] as `0x`-prefixed lowercase hex strings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContractParametersHex {
    pub public_key: String,
    pub proof: String,
    pub output: String,
}

impl ContractParameters {
    /// Prove `alpha` once and package the key, proof and output of that proof.
    pub fn generate(keypair: &Keypair, alpha: &[u8]) -> Result<Self, VrfError> {
        let (proof, output) = keypair.prove(alpha)?;
        Ok(Self { public_key: keypair.public_key_bytes(), proof, output })
    }

    /// Check the triple the way the verifying contract does: the proof must be
    /// valid for `alpha` under the public key, and the stated output must be
    /// the one the proof yields.
    pub fn verify(&self, alpha: &[u8]) -> Result<(), VrfError> {
        let pk = PublicKey::from_bytes(&self.public_key)?;
        let recovered = pk.verify(alpha, &self.proof.0)?;
        if recovered.ct_eq(&self.output) {
            Ok(())
        } else {
            debug!("contract parameters carry an output that does not match the proof");
            Err(VrfError::VerificationFailed)
        }
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; CONTRACT_BLOB_LEN] {
        encode_contract_parameters(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        decode_contract_parameters(bytes)
    }

    #[must_use]
    pub fn to_hex(&self) -> ContractParametersHex {
        ContractParametersHex {
            public_key: to_prefixed_hex(&self.public_key),
            proof: to_prefixed_hex(&self.proof.0),
            output: to_prefixed_hex(&self.output.0),
        }
    }
}

impl ContractParametersHex {
    /// Parse back into bytes; the `0x` prefix is optional, lengths are exact.
    pub fn decode(&self) -> Result<ContractParameters, VrfError> {
        Ok(ContractParameters {
            public_key: from_hex_exact(&self.public_key, "public key")?,
            proof: VrfProof(from_hex_exact(&self.proof, "proof")?),
            output: VrfOutput(from_hex_exact(&self.output, "output")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecodeError;

    fn params() -> (Keypair, ContractParameters) {
        let kp = Keypair::from_secret_bytes(&[11u8; 32]).unwrap();
        let p = ContractParameters::generate(&kp, b"report-42").unwrap();
        (kp, p)
    }

    #[test]
    fn generated_parameters_verify() {
        let (kp, p) = params();
        assert_eq!(p.public_key, kp.public_key_bytes());
        p.verify(b"report-42").unwrap();
        assert_eq!(p.verify(b"report-43").unwrap_err(), VrfError::VerificationFailed);
    }

    #[test]
    fn mismatched_output_is_rejected() {
        let (_, mut p) = params();
        p.output.0[0] ^= 0x80;
        assert_eq!(p.verify(b"report-42").unwrap_err(), VrfError::VerificationFailed);
    }

    #[test]
    fn foreign_public_key_is_rejected() {
        let (_, mut p) = params();
        p.public_key = Keypair::from_secret_bytes(&[12u8; 32]).unwrap().public_key_bytes();
        assert_eq!(p.verify(b"report-42").unwrap_err(), VrfError::VerificationFailed);
        p.public_key = [0u8; 32];
        assert!(p.verify(b"report-42").unwrap_err().is_encoding());
    }

    #[test]
    fn hex_round_trip() {
        let (_, p) = params();
        let h = p.to_hex();
        assert!(h.public_key.starts_with("0x"));
        assert_eq!(h.proof.len(), 2 + 160);
        assert_eq!(h.output.len(), 2 + 128);
        assert_eq!(h.decode().unwrap(), p);
    }

    #[test]
    fn hex_with_wrong_lengths_is_rejected() {
        let (_, p) = params();
        let mut h = p.to_hex();
        h.proof.push_str("00");
        assert_eq!(h.decode().unwrap_err(), VrfError::length("proof", 80, 81));
        let mut h = p.to_hex();
        h.output.replace_range(2..4, "zz");
        assert_eq!(
            h.decode().unwrap_err(),
            VrfError::InvalidEncoding(DecodeError::Hex("output"))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hex_form_serializes_with_camel_case_keys() {
        let (_, p) = params();
        let json = serde_json::to_value(p.to_hex()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["output", "proof", "publicKey"]);
        assert_eq!(obj["publicKey"], to_prefixed_hex(&p.public_key));

        let back: ContractParametersHex = serde_json::from_value(json).unwrap();
        assert_eq!(back.decode().unwrap(), p);
    }

    #[test]
    fn blob_round_trip() {
        let (_, p) = params();
        assert_eq!(ContractParameters::from_bytes(&p.to_bytes()).unwrap(), p);
    }
}
