//! Bit mixing primitives shared by the message scheduler and the round function.

/// Rotates `x` right by `n` bits. Only counts in `1..32` are used by SHA-256.
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && n < 32, "rotation out of range: {}", n);
    (x >> n) | (x << (32 - n))
}

/// Schedule mixing applied to `w[i - 15]`.
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// Schedule mixing applied to `w[i - 2]`.
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(a: u32) -> u32 {
    rotr(a, 2) ^ rotr(a, 13) ^ rotr(a, 22)
}

#[inline(always)]
pub fn big_sigma1(e: u32) -> u32 {
    rotr(e, 6) ^ rotr(e, 11) ^ rotr(e, 25)
}

/// Bitwise choice: takes bits of `f` where `e` is set, bits of `g` elsewhere.
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Bitwise majority of the three inputs.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}
