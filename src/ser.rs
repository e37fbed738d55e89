use crate::{
    contract::ContractParameters,
    errors::{DecodeError, VrfError},
    keys::PublicKey,
    proof::Proof,
    types::{VrfOutput, VrfProof, OUTPUT_LEN, PROOF_LEN, PUBLIC_KEY_LEN},
};

/// Canonical contract blob length: public key (32) || proof (80) || output (64).
pub const CONTRACT_BLOB_LEN: usize = PUBLIC_KEY_LEN + PROOF_LEN + OUTPUT_LEN;

/// Canonical contract parameter encoding.
/// Order is fixed; lengths are exact; no trailing bytes.
#[must_use]
pub fn encode_contract_parameters(params: &ContractParameters) -> [u8; CONTRACT_BLOB_LEN] {
    let mut out = [0u8; CONTRACT_BLOB_LEN];
    let mut off = 0usize;
    out[off..off + PUBLIC_KEY_LEN].copy_from_slice(&params.public_key); off += PUBLIC_KEY_LEN;
    out[off..off + PROOF_LEN].copy_from_slice(&params.proof.0);         off += PROOF_LEN;
    out[off..].copy_from_slice(&params.output.0);
    out
}

/// Decode a contract parameter blob.
///
/// The public key must be a valid VRF key and the proof must decode;
/// [`ContractParameters::verify`] checks that they belong together.
///
/// # Errors
///
/// Returns `VrfError::InvalidEncoding` if the blob is not exactly
/// [`CONTRACT_BLOB_LEN`] bytes or a component does not decode.
pub fn decode_contract_parameters(data: &[u8]) -> Result<ContractParameters, VrfError> {
    if data.len() != CONTRACT_BLOB_LEN {
        return Err(VrfError::length("contract parameters", CONTRACT_BLOB_LEN, data.len()));
    }
    let (public_key, rest) = data.split_at(PUBLIC_KEY_LEN);
    let (proof, output) = rest.split_at(PROOF_LEN);
    Proof::from_bytes(proof)?;
    Ok(ContractParameters {
        public_key: PublicKey::from_bytes(public_key)?.to_bytes(),
        proof: VrfProof::try_from(proof)?,
        output: VrfOutput::try_from(output)?,
    })
}

/// Lowercase hex with a `0x` prefix.
#[must_use]
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex with or without a `0x`/`0X` prefix into exactly `N` bytes.
///
/// # Errors
///
/// Returns `VrfError::InvalidEncoding`: `DecodeError::Hex` for non-hex or
/// odd-length input, `DecodeError::Length` (in bytes) for a whole number of
/// bytes other than `N`.
pub fn from_hex_exact<const N: usize>(s: &str, what: &'static str) -> Result<[u8; N], VrfError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() % 2 != 0 {
        return Err(DecodeError::Hex(what).into());
    }
    if digits.len() != 2 * N {
        return Err(VrfError::length(what, N, digits.len() / 2));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|_| DecodeError::Hex(what))?;
    Ok(out)
}
