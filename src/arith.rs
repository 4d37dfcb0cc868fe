//! Lazy modular arithmetic over GF(2^61 - 1) and little-endian byte loading.
//!
//! Field elements are represented as `u64`s that are congruent to, but not
//! necessarily less than, `P611`. Reduction is applied only where the next
//! operation requires it (`red611`, `extrared611`); no value here is ever
//! compared for equality as a group element, only as an opaque word once it
//! reaches the final hash output.

/// 2^61 - 1, a Mersenne prime.
pub const P611: u64 = (1u64 << 61) - 1;

/// Exact 64x64 -> 128-bit product.
#[inline]
pub fn mul128(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Wrapping 128-bit add.
#[inline]
pub fn add128(a: u128, b: u128) -> u128 {
    a.wrapping_add(b)
}

/// Partial reduction. For `x < 2^122` the result is congruent to `x` mod
/// `P611` and fits in 63 bits.
#[inline]
pub fn red611(x: u128) -> u64 {
    ((x as u64) & P611) + ((x >> 61) as u64)
}

/// Extra reduction. For `x < 2^62` the result fits in 61 bits.
#[inline]
pub fn extrared611(x: u64) -> u64 {
    (x & P611) + (x >> 61)
}

/// Loads 1 to 8 bytes from `buf` as a little-endian word, with the
/// overlapping-read trick used throughout `poly611`: for `len < 4` the three
/// reads may alias the same byte (`len == 1`), or the first two (`len ==
/// 2`), or the first three (`len == 3`); for `4 <= len <= 8` the low and high
/// 32-bit loads may overlap in the middle. The overlap bytes are read twice
/// but always combine to the same value, so this is safe and branch-light.
#[inline]
pub fn load_le_u64_1_8(buf: &[u8], len: usize) -> u64 {
    debug_assert!((1..=8).contains(&len));
    debug_assert!(buf.len() >= len);
    if len < 4 {
        let mut v = buf[0] as u64;
        v |= (buf[len / 2] as u64) << (8 * (len / 2));
        v |= (buf[len - 1] as u64) << (8 * (len - 1));
        v
    } else {
        let lo = load_le_u32(buf) as u64;
        let hi = load_le_u32(&buf[len - 4..]) as u64;
        lo | (hi << (8 * (len - 4)))
    }
}

/// Little-endian 4-byte load, independent of host byte order.
#[inline]
pub fn load_le_u32(buf: &[u8]) -> u32 {
    u32::from_le_bytes(buf[0..4].try_into().unwrap())
}

/// Little-endian 8-byte load, independent of host byte order.
#[inline]
pub fn load_le_u64(buf: &[u8]) -> u64 {
    u64::from_le_bytes(buf[0..8].try_into().unwrap())
}

/// MX3 avalanche mixer (rev2, Kagstrom), applied twice with shift-xor steps
/// around each multiply. https://jonkagstrom.com/mx3/mx3_rev2.html
#[inline]
pub fn mix(x: u64) -> u64 {
    const MX3_MUL: u64 = 0x0E9846AF9B1A615D;
    let mut x = x;
    x ^= x >> 32;
    x = x.wrapping_mul(MX3_MUL);
    x ^= x >> 32;
    x = x.wrapping_mul(MX3_MUL);
    x ^= x >> 28;
    x
}
