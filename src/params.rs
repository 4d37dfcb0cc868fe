//! Seeding: maps a 64-bit (or 128-bit) user seed to a `Params` record via
//! modular exponentiation in GF(2^61 - 1) with rejection sampling.

use crate::arith::{extrared611, mix, mul128, red611};

/// Completely arbitrary, these are taken from SHA-2: the fractional bits of
/// sqrt(2), sqrt(3), sqrt(5), sqrt(7).
const ARBITRARY1: u64 = 0x6A09E667F3BCC908;
const ARBITRARY2: u64 = 0xBB67AE8584CAA73B;
const ARBITRARY3: u64 = 0x3C6EF372FE94F82B;
const ARBITRARY4: u64 = 0xA54FF53A5F1D36F1;

/// The generator used to seed the power table: an arbitrary small base, not
/// otherwise special.
const BASE: u64 = 37;
/// `BASE^(2^32) mod (2^61 - 1)`, precomputed so the table's two halves can be
/// filled independently by repeated squaring.
const BASE_POW_2_32: u64 = 559096694736811184;

/// Bound required by `poly611`'s inner loop for efficient reduction.
/// `k7 >= this` is rejected and re-derived.
pub(crate) const K7_BOUND: u64 = (1 << 60) - (1 << 56);

/// Immutable hash parameters derived once from a seed and consumed read-only
/// by `hash`. `Copy` so a single `Params` can be handed to any number of
/// threads without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// A generator of (Z/(2^61 - 1))*, in the reduced range `[0, 2^61)`.
    pub k: u64,
    /// `k^2 mod (2^61 - 1)`, in `[0, 2^61)`.
    pub k2: u64,
    /// `k^7 mod (2^61 - 1)`, in `[0, 2^60 - 2^56)`; the inner loop of
    /// `poly611` relies on this bound to keep its products under 2^62.
    pub k7: u64,
    /// Free 64-bit addend folded in only during final mixing.
    pub s: u64,
}

/// `POW37[i] = 37^(2^i) mod (2^61 - 1)`, used to compute `37^e` by scanning
/// `e`'s bits. Built once per `init_params` call; this is rare enough
/// (seeding, not per-hash) that a precomputed static LUT isn't worth the
/// ~400 bytes of binary size it would cost.
fn pow37_table() -> [u64; 64] {
    let mut table = [0u64; 64];
    table[0] = BASE;
    table[32] = BASE_POW_2_32;
    for i in 0..31 {
        table[i + 1] = extrared611(red611(mul128(table[i], table[i])));
        table[i + 33] = extrared611(red611(mul128(table[i + 32], table[i + 32])));
    }
    table
}

/// `37^e mod (2^61 - 1)`, computed two exponent bits at a time against the
/// precomputed power table.
fn pow37(table: &[u64; 64], mut e: u64) -> u64 {
    let mut ka: u64 = 1;
    let mut kb: u64 = 1;
    let mut i = 0;
    while e != 0 {
        if e & 1 != 0 {
            ka = extrared611(red611(mul128(ka, table[i])));
        }
        if e & 2 != 0 {
            kb = extrared611(red611(mul128(kb, table[i + 1])));
        }
        i += 2;
        e >>= 2;
    }
    extrared611(red611(mul128(ka, kb)))
}

/// `e` is rejected unless it is coprime to `2^61 - 2`, whose odd prime
/// factors are exactly this list (`2^61 - 2 = 2 * 3^2 * 5^2 * 7 * 11 * 13 *
/// 31 * 41 * 61 * 151 * 331 * 1321`). Combined with `e` odd (guaranteed by
/// the caller), this makes `37^e` a generator of the full multiplicative
/// group.
fn coprime_to_group_order(e: u64) -> bool {
    e % 3 != 0
        && e % 5 != 0
        && e % 7 != 0
        && e % 11 != 0
        && e % 13 != 0
        && e % 31 != 0
        && e % 41 != 0
        && e % 61 != 0
        && e % 151 != 0
        && e % 331 != 0
        && e % 1321 != 0
}

/// Expands a 64-bit or 128-bit seed to a set of parameters for hash
/// evaluation. The loop below terminates with probability 1 (expected ~6
/// iterations: ~35.3% of exponents survive the coprimality check, and
/// ~46.875% of those give a `k7` under the required bound) and must not be
/// artificially capped.
pub fn init_params(k_seed: u64, s_seed: u64) -> Params {
    let s = s_seed ^ ARBITRARY1; // People love to pass zero.
    let table = pow37_table();

    let mut k_seed = k_seed;
    loop {
        k_seed = k_seed.wrapping_add(ARBITRARY2);
        let e = (k_seed >> 3) | 1; // e < 2^61, odd.
        if !coprime_to_group_order(e) {
            continue;
        }

        // 37^e is another generator, since e is coprime with the order of
        // the multiplicative group mod 2^61 - 1 and 37 is a generator.
        let k = extrared611(pow37(&table, e));

        let k2 = extrared611(red611(mul128(k, k)));
        let k3 = red611(mul128(k, k2));
        let k4 = red611(mul128(k2, k2));
        let k7 = extrared611(red611(mul128(k3, k4)));
        if k7 < K7_BOUND {
            return Params { k, k2, k7, s };
        }
        // Key space is log2(totient(2^61 - 2) * (2^60-2^56)/2^61) ~= 57.4 bits.
    }
}

/// Derives `Params` from a single 64-bit seed by mixing it into the two
/// seeds `init_params` expects.
pub fn init_params_from_seed(seed: u64) -> Params {
    init_params(
        mix(seed.wrapping_add(ARBITRARY3)),
        mix(seed.wrapping_add(ARBITRARY4)),
    )
}
