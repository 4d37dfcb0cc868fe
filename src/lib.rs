//! PolymurHash: a keyed, seeded, 64-bit non-cryptographic hash function for
//! byte strings of arbitrary length.
//!
//! PolymurHash evaluates a polynomial over the Mersenne prime field
//! GF(2^61 - 1) and finishes with an MX3-style avalanche mix. Against an
//! adversary that does not know the derived key it carries a provable
//! collision bound; it is not a cryptographic hash, not a MAC, and does not
//! support incremental/streaming updates — see the module docs in
//! [`params`] and [`poly`] for the algorithm itself.
//!
//! ```
//! let params = polymurhash::init_params_from_seed(0xFEDBCA9876543210);
//! let tweak = 0xABCDEF0123456789;
//! assert_eq!(polymurhash::hash(b"", &params, tweak), 0);
//! assert_eq!(polymurhash::hash(b"i", &params, tweak), 0xD16D059771C65E13);
//! ```

mod arith;
mod params;
mod poly;

pub use params::{init_params, init_params_from_seed, Params};

/// Computes the 64-bit digest of `buf` under `params`, folding in `tweak`
/// before final mixing. The empty buffer always hashes to `0`, independent
/// of `params` and `tweak`.
///
/// `tweak` is cheaper than re-deriving `Params` for a related but distinct
/// hash, but offers no collision-resistance guarantee between outputs for
/// distinct tweaks over the same buffer.
#[inline]
pub fn hash(buf: &[u8], params: &Params, tweak: u64) -> u64 {
    if buf.is_empty() {
        return 0;
    }
    let h = poly::poly611(buf, params, tweak);
    arith::mix(h).wrapping_add(params.s)
}
