//! Machine-word limb primitives.
//!
//! These are the only place the rest of the crate depends on the native
//! word width `W`: 64 bits on 64-bit targets, 32 bits otherwise. Everything
//! above this module operates purely in terms of [`Limb`]/[`DoubleLimb`]
//! and the three functions below.

#[cfg(target_pointer_width = "64")]
pub type Limb = u64;
#[cfg(target_pointer_width = "64")]
pub type DoubleLimb = u128;

#[cfg(not(target_pointer_width = "64"))]
pub type Limb = u32;
#[cfg(not(target_pointer_width = "64"))]
pub type DoubleLimb = u64;

pub const LIMB_BITS: u32 = Limb::BITS;
pub const LIMB_MAX: Limb = Limb::MAX;

/// The largest power of ten that fits in a single limb (`10^16` for `W =
/// 64`, `10^8` for `W = 32`), and its decimal exponent / bit length.
#[cfg(target_pointer_width = "64")]
pub const LTEN: Limb = 10_000_000_000_000_000;
#[cfg(target_pointer_width = "64")]
pub const LTEN_EXP: u32 = 16;
#[cfg(target_pointer_width = "64")]
pub const LTEN_BIT: u32 = 54;

#[cfg(not(target_pointer_width = "64"))]
pub const LTEN: Limb = 100_000_000;
#[cfg(not(target_pointer_width = "64"))]
pub const LTEN_EXP: u32 = 8;
#[cfg(not(target_pointer_width = "64"))]
pub const LTEN_BIT: u32 = 27;

/// `a + b + cin`, returning `(sum, cout)` with `cout in {0, 1}`.
///
/// LLVM recognizes this two-`overflowing_add` shape as a carry chain on
/// every common target (x86, x86-32, ARM).
#[inline]
pub fn add_with_carry(a: Limb, b: Limb, cin: u8) -> (Limb, u8) {
    let (sum1, c1) = a.overflowing_add(b);
    let (sum2, c2) = sum1.overflowing_add(cin as Limb);
    (sum2, (c1 as u8) | (c2 as u8))
}

/// `a * b = hi * 2^W + lo`.
#[inline]
pub fn widen_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let wide = (a as DoubleLimb) * (b as DoubleLimb);
    (
        (wide >> LIMB_BITS) as Limb,
        wide as Limb,
    )
}

/// Count leading zeros of a non-zero limb. Undefined (but not unsafe) to
/// call with `x == 0`, the same contract `__builtin_clzll` has.
#[inline]
pub fn clz(x: Limb) -> u32 {
    x.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn add_with_carry_matches_double_width(a: Limb, b: Limb, cin: bool) -> bool {
        let expected = a as DoubleLimb + b as DoubleLimb + cin as DoubleLimb;
        let (sum, cout) = add_with_carry(a, b, cin as u8);
        let got = sum as DoubleLimb + ((cout as DoubleLimb) << LIMB_BITS);
        got == expected
    }

    #[quickcheck]
    fn widen_mul_matches_double_width(a: Limb, b: Limb) -> bool {
        let expected = a as DoubleLimb * b as DoubleLimb;
        let (hi, lo) = widen_mul(a, b);
        let got = ((hi as DoubleLimb) << LIMB_BITS) | lo as DoubleLimb;
        got == expected
    }

    #[test]
    fn clz_boundaries() {
        assert_eq!(clz(1), LIMB_BITS - 1);
        assert_eq!(clz(LIMB_MAX), 0);
    }
}
