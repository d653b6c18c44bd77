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
use sinpi::{sinpi, to_words};
use std::f64::consts::PI;

fn main() {
    let values = [
        0.0,
        0.25,
        1.0 / 3.0,
        0.5,
        1.0,
        5.0 / 4.0,
        1.5,
        -1.0,
        -2.0,
        1e16 + 2.0,
        f64::NAN,
        f64::INFINITY,
    ];

    println!(
        "{:>24} {:>24} {:>24} {:>24}",
        "x", "sinpi", "sin(PI * x)", "libm::sin(PI * x)"
    );
    for x in values {
        match sinpi(x) {
            Ok(v) => {
                let (high, low) = to_words(v);
                println!(
                    "{:>24e} {:>24e} {:>24e} {:>24e}  [{high:08x} {low:08x}]",
                    x,
                    v,
                    (PI * x).sin(),
                    libm::sin(PI * x)
                );
            }
            Err(err) => println!("{x:>24e} {err}"),
        }
    }
}
