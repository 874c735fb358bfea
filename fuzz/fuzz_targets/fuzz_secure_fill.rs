#![no_main]
use libfuzzer_sys::fuzz_target;
use teebn_core::secure_fill;

fuzz_target!(|input: (Vec<u8>, u8, u16)| {
    let (mut buf, fill, count) = input;
    let count = count as usize;
    let cap = buf.len();

    let result = secure_fill(&mut buf, fill, count);

    // The clamped prefix is always filled, and overflow is always reported.
    let n = count.min(cap);
    assert!(buf[..n].iter().all(|&b| b == fill));
    assert_eq!(result.is_err(), count > cap);
});
