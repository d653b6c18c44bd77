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

const SIGN_MASK: u32 = 0x8000_0000;
const MAGNITUDE_MASK: u32 = 0x7fff_ffff;

/// Splits a double into higher and lower order words.
///
/// Higher order word holds the sign, the exponent and the top 20 bits of
/// the mantissa, lower order word holds the rest of the mantissa.
/// Order does not depend on host endianness.
#[inline]
pub const fn to_words(x: f64) -> (u32, u32) {
    let bits = x.to_bits();
    ((bits >> 32) as u32, bits as u32)
}

/// Assembles a double from higher and lower order words, inverse of [to_words]
#[inline]
pub const fn from_words(high: u32, low: u32) -> f64 {
    f64::from_bits(((high as u64) << 32) | low as u64)
}

/// Higher order word of a double
#[inline]
pub const fn get_high_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

/// Returns a double with the magnitude of `x` and the sign of `y`.
///
/// NaN payload of `x` is kept as is, `-0.` in `y` counts as negative.
#[inline]
pub const fn copysign(x: f64, y: f64) -> f64 {
    let (mut hx, lx) = to_words(x);
    hx &= MAGNITUDE_MASK;
    let hy = get_high_word(y) & SIGN_MASK;
    from_words(hx | hy, lx)
}
