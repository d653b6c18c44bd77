/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::SinPiError;
use crate::words::copysign;
use pxfm::{f_cos, f_sin};
use std::f64::consts::PI;

// Identities in use:
//   sin(-x) = -sin(x)
//   sin(+n) = +0, sin(-n) = -0 for a positive integer n
//   cos(-x) = cos(x)

/// Computes sin(πx).
///
/// Argument is reduced to (-2, 2) with the sign kept and then each
/// quarter period is folded to the interval [-π/4, π/4] where sine and
/// cosine are the most accurate.
///
/// Integers produce zero with the sign of `x mod 2`, so `sinpi(-2)` is `-0`.
/// NaN is returned as is, infinities are rejected with [SinPiError::InvalidArgument].
#[inline]
pub fn sinpi(x: f64) -> Result<f64, SinPiError> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x.is_infinite() {
        return Err(SinPiError::InvalidArgument(x));
    }

    // fmod keeps the sign of the dividend
    let r = x % 2.0;
    let ar = r.abs();

    if ar == 0.0 || ar == 1.0 {
        return Ok(copysign(0.0, r));
    }
    if ar < 0.25 {
        return Ok(f_sin(PI * r));
    }
    if ar < 0.75 {
        return Ok(copysign(f_cos(PI * (0.5 - ar)), r));
    }
    if ar < 1.25 {
        return Ok(f_sin(PI * (copysign(1.0, r) - r)));
    }
    if ar < 1.75 {
        return Ok(-copysign(f_cos(PI * (ar - 1.5)), r));
    }
    Ok(f_sin(PI * (r - copysign(2.0, r))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_close(value: f64, expected: f64, tolerance: f64) {
        assert!(
            (value - expected).abs() <= tolerance,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn sinpi_test() {
        let cases = [
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (1.0 / 3.0, 0.8660254037844386),
            (5.0 / 4.0, -0.7071067811865476),
            (0.25, 0.7071067811865476),
            (-0.1, -0.3090169943749474),
            (1.9, -0.3090169943749474),
        ];
        for (x, expected) in cases {
            assert_close(sinpi(x).unwrap(), expected, 1e-12);
        }
        assert_eq!(sinpi(0.5).unwrap(), 1.0);
        assert_eq!(sinpi(1.5).unwrap(), -1.0);
        assert_eq!(sinpi(-0.5).unwrap(), -1.0);
        assert_eq!(sinpi(2.5).unwrap(), 1.0);
        let minus_one = sinpi(-1.0).unwrap();
        assert_eq!(minus_one, 0.0);
        assert!(minus_one.is_sign_negative());
        let minus_two = sinpi(-2.0).unwrap();
        assert_eq!(minus_two, 0.0);
        assert!(minus_two.is_sign_negative());
    }

    #[test]
    fn sinpi_branch_edges_are_odd() {
        let edges = [
            0.25,
            0.75,
            1.25,
            1.75,
            4.5e15,
            4.5e15 + 1.0,
            f64::MIN_POSITIVE,
            f64::MAX,
        ];
        for x in edges {
            let value = sinpi(x).unwrap();
            let mirrored = sinpi(-x).unwrap();
            assert_eq!(
                mirrored.to_bits(),
                (-value).to_bits(),
                "sinpi(-{x}) != -sinpi({x})"
            );
        }
        assert!(sinpi(-f64::MAX).unwrap().is_sign_negative());
        assert!(sinpi(-4.5e15 - 1.0).unwrap().is_sign_negative());
        assert!(sinpi(4.5e15 + 1.0).unwrap().is_sign_positive());
    }

    #[test]
    fn sinpi_signed_zeros() {
        for n in [0.0, 1.0, 2.0, 3.0, 10.0, 1e15, 1e300] {
            let positive = sinpi(n).unwrap();
            let negative = sinpi(-n).unwrap();
            assert_eq!(positive, 0.0);
            assert_eq!(negative, 0.0);
            assert!(positive.is_sign_positive(), "sinpi({n}) must be +0");
            assert!(negative.is_sign_negative(), "sinpi(-{n}) must be -0");
        }
        assert!(sinpi(-0.0).unwrap().is_sign_negative());
    }

    #[test]
    fn sinpi_special_values() {
        assert!(sinpi(f64::NAN).unwrap().is_nan());
        assert_eq!(
            sinpi(f64::INFINITY),
            Err(SinPiError::InvalidArgument(f64::INFINITY))
        );
        assert_eq!(
            sinpi(f64::NEG_INFINITY),
            Err(SinPiError::InvalidArgument(f64::NEG_INFINITY))
        );
        assert_eq!(sinpi(f64::MAX).unwrap(), 0.0);
        let tiny = f64::from_bits(1);
        assert_eq!(sinpi(tiny).unwrap(), PI * tiny);
    }

    #[test]
    fn sinpi_matches_direct_evaluation() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let x = rng.random_range(-4.0..4.0);
            assert_close(sinpi(x).unwrap(), (PI * x).sin(), 1e-12);
        }
    }

    #[test]
    fn sinpi_is_bounded_and_odd() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let x: f64 = rng.random_range(-1e9..1e9);
            let value = sinpi(x).unwrap();
            assert!((-1.0..=1.0).contains(&value));
            assert_close(sinpi(-x).unwrap(), -value, 1e-15);
        }
    }

    #[test]
    fn sinpi_is_periodic() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let x = rng.random_range(-2.0..2.0);
            let k = rng.random_range(-1000..1000) as f64;
            assert_close(sinpi(x + 2.0 * k).unwrap(), sinpi(x).unwrap(), 1e-9);
        }
    }
}
