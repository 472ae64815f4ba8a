#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibstats_core::{sequence, stats, Average};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Signed 16-bit count, capped for speed
    let n = i64::from(i16::from_le_bytes([data[0], data[1]])) % 2_000;

    let s = stats(n);
    assert_eq!(s.sequence, sequence(n), "stats/sequence mismatch at n={n}");

    if n <= 0 {
        assert_eq!(s.length, 0);
        assert!(s.average.is_none() && s.maximum.is_none() && s.minimum.is_none());
        return;
    }

    let count = usize::try_from(n).unwrap();
    assert_eq!(s.length, count);
    for k in 2..count {
        assert_eq!(s.sequence[k], &s.sequence[k - 1] + &s.sequence[k - 2]);
    }

    let sum: BigUint = s.sequence.iter().sum();
    assert_eq!(s.average, Average::new(sum, count));
    assert_eq!(s.minimum.as_ref(), s.sequence.first());
    assert_eq!(s.maximum.as_ref(), s.sequence.last());
});
