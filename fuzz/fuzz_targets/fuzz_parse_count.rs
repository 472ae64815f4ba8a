#![no_main]

use libfuzzer_sys::fuzz_target;

use fibstats_core::{parse_count, StatsError};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match parse_count(text) {
        Ok(n) => assert_eq!(text.trim().parse::<i64>(), Ok(n)),
        Err(StatsError::InvalidCount(s) | StatsError::OutOfRange(s)) => {
            assert_eq!(s, text.trim());
        }
    }
});
