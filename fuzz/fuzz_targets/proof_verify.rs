#![no_main]

use libfuzzer_sys::fuzz_target;
use relief_ecvrf::{verify, PROOF_LEN, PUBLIC_KEY_LEN};

fuzz_target!(|data: &[u8]| {
    // public key || proof || alpha
    if data.len() < PUBLIC_KEY_LEN + PROOF_LEN {
        return;
    }
    let (pk, rest) = data.split_at(PUBLIC_KEY_LEN);
    let (proof, alpha) = rest.split_at(PROOF_LEN);
    let _ = verify(pk, alpha, proof);
});
