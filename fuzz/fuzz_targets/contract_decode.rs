#![no_main]

use libfuzzer_sys::fuzz_target;
use relief_ecvrf::ContractParameters;

fuzz_target!(|data: &[u8]| {
    if let Ok(params) = ContractParameters::from_bytes(data) {
        assert_eq!(params.to_bytes().as_slice(), data);
        let _ = params.verify(b"fuzz");
    }
});
