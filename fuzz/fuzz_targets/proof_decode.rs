#![no_main]

use libfuzzer_sys::fuzz_target;
use relief_ecvrf::proof_to_hash;

fuzz_target!(|data: &[u8]| {
    let _ = proof_to_hash(data);
});
