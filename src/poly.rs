//! The polynomial accumulator: evaluates a degree-bounded polynomial over
//! GF(2^61 - 1) in 49-byte blocks, with a tail phase for the remainder.
//!
//! The length dispatch below (`<= 7`, `>= 50`, `8..=21`, `22..=49`) is fixed
//! by the reference vectors in `tests/vectors.rs`; none of these boundaries
//! are arbitrary even though some look off-by-one (see the open-question
//! note in `DESIGN.md`).

use crate::arith::{add128, extrared611, load_le_u64, load_le_u64_1_8, mul128, red611};
use crate::params::{Params, K7_BOUND};

const MASK56: u64 = 0x00FF_FFFF_FFFF_FFFF;

/// Evaluates the polynomial accumulator over `buf`, seeded with `tweak`.
/// Returns 0 for an empty buffer (the caller in `hash` already special-cases
/// this, but `poly611` is total on its own for robustness).
pub fn poly611(buf: &[u8], p: &Params, tweak: u64) -> u64 {
    debug_assert!(p.k7 < K7_BOUND, "k7 invariant violated by caller's Params");

    let mut poly_acc = tweak;
    let n = buf.len();

    if n == 0 {
        return 0;
    }
    if n <= 7 {
        let m0 = load_le_u64_1_8(buf, n);
        return poly_acc.wrapping_add(red611(mul128(p.k + m0, p.k2 + n as u64)));
    }

    let mut k3 = red611(mul128(p.k, p.k2));
    let mut k4 = red611(mul128(p.k2, p.k2));

    let mut buf = buf;
    let mut n = n;
    if n >= 50 {
        let k5 = extrared611(red611(mul128(p.k, k4)));
        let k6 = extrared611(red611(mul128(p.k2, k4)));
        k3 = extrared611(k3);
        k4 = extrared611(k4);

        let mut h: u64 = 0;
        while n >= 50 {
            let mut m = [0u64; 7];
            for (i, mi) in m.iter_mut().enumerate() {
                *mi = load_le_u64(&buf[7 * i..]) & MASK56;
            }
            let t0 = mul128(p.k + m[0], k6 + m[1]);
            let t1 = mul128(p.k2 + m[2], k5 + m[3]);
            let t2 = mul128(k3 + m[4], k4 + m[5]);
            let t3 = mul128(h + m[6], p.k7);
            let s = add128(add128(t0, t1), add128(t2, t3));
            h = red611(s);
            n -= 49;
            buf = &buf[49..];
        }
        let k14 = red611(mul128(p.k7, p.k7));
        let hk14 = red611(mul128(extrared611(h), k14));
        poly_acc = poly_acc.wrapping_add(extrared611(hk14));
    }

    if n >= 8 {
        let m0 = load_le_u64(buf) & MASK56;
        let m1 = load_le_u64(&buf[(n - 7) / 2..]) & MASK56;
        let m2 = load_le_u64(&buf[n - 8..]) >> 8;
        let t0 = mul128(p.k2 + m0, p.k7 + m1);
        let t1 = mul128(p.k + m2, k3 + n as u64);
        if n <= 21 {
            return poly_acc.wrapping_add(red611(add128(t0, t1)));
        }
        let m3 = load_le_u64(&buf[7..]) & MASK56;
        let m4 = load_le_u64(&buf[14..]) & MASK56;
        let m5 = load_le_u64(&buf[n - 21..]) & MASK56;
        let m6 = load_le_u64(&buf[n - 14..]) & MASK56;
        let t0r = red611(t0);
        let t2 = mul128(p.k2 + m3, p.k7 + m4);
        let t3 = mul128(t0r + m5, k4 + m6);
        let s = add128(add128(t1, t2), t3);
        return poly_acc.wrapping_add(red611(s));
    }

    // Reached when the n >= 50 block loop leaves a residue below 8 (e.g. an
    // original length of 50 leaves exactly 1 byte); the initial n <= 7
    // branch above only catches buffers that were short to begin with.
    let m0 = load_le_u64_1_8(buf, n);
    poly_acc.wrapping_add(red611(mul128(p.k + m0, p.k2 + n as u64)))
}
