#![no_main]
use libfuzzer_sys::fuzz_target;
use teebn_core::{BigNumCtx, NativeBackend, WORD_SIZE};

fuzz_target!(|data: &[u8]| {
    let backend = NativeBackend;
    let byte_len = data.len();
    match BigNumCtx::create(&backend, Some(data), byte_len) {
        Ok(bn) => {
            // Create only succeeds on word-aligned lengths, and the value
            // must survive the round trip.
            assert!(byte_len > 0 && byte_len % WORD_SIZE == 0);
            if let Ok(back) = bn.to_value_bytes(&backend) {
                assert_eq!(back, data);
            }
        }
        Err(_) => {
            assert!(byte_len == 0 || byte_len % WORD_SIZE != 0);
        }
    }
});
