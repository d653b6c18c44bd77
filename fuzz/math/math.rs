#![no_main]

use libfuzzer_sys::fuzz_target;
use sinpi::{SinPiError, copysign, from_words, get_high_word, sinpi, to_words};

fuzz_target!(|data: (u64, u64)| {
    let x = f64::from_bits(data.0);
    let y = f64::from_bits(data.1);

    let (high, low) = to_words(x);
    assert_eq!(high, get_high_word(x));
    assert_eq!(from_words(high, low).to_bits(), data.0);

    assert_eq!(copysign(x, y).to_bits(), x.copysign(y).to_bits());

    match sinpi(x) {
        Ok(v) => {
            if x.is_nan() {
                assert!(v.is_nan());
            } else {
                assert!((-1.0..=1.0).contains(&v));
                let mirrored = sinpi(-x).unwrap();
                assert!((v + mirrored).abs() <= 1e-15);
            }
        }
        Err(SinPiError::InvalidArgument(value)) => {
            assert!(x.is_infinite());
            assert_eq!(value, x);
        }
    }
});
