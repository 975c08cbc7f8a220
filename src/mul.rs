//! Schoolbook multiplication and specialized squaring.
//!
//! Both build their result in a freshly allocated bignum, so neither needs
//! to reason about output/input aliasing the way `shl_assign`/`add_assign`
//! do — the accumulation scratch is always distinct from `a` and `b`.

use crate::bignum::Bignum;
use crate::error::Result;
use crate::limb::{add_with_carry, widen_mul};

impl Bignum {
    /// `a * b`, schoolbook style: for each limb of the shorter operand,
    /// compute its full product against the longer operand into a
    /// single-row scratch bignum, then fold that row into the running
    /// total shifted by the row's limb offset.
    pub fn mul(a: &Bignum, b: &Bignum) -> Result<Bignum> {
        if a.is_zero() || b.is_zero() {
            return Ok(Bignum::zero());
        }
        let (mcand, mplier) = if a.size >= b.size { (a, b) } else { (b, a) };
        let mut ans = Bignum::with_capacity(mcand.size + mplier.size)?;
        let mut row = Bignum::with_capacity(mcand.size + 1)?;
        for i in 0..mplier.size {
            row.set_zero();
            let mut carry = 0u8;
            let mut overlap: crate::limb::Limb = 0;
            for j in 0..mcand.size {
                let (hi, lo) = widen_mul(mcand.data[j], mplier.data[i]);
                let (sum, c) = add_with_carry(lo, overlap, carry);
                row.data[j] = sum;
                carry = c;
                overlap = hi;
            }
            row.data[mcand.size] = overlap + carry as crate::limb::Limb;
            row.size = mcand.size + 1;
            row.normalize();
            mult_add(&row, i, &mut ans)?;
        }
        ans.normalize();
        Ok(ans)
    }

    /// `a * a`, computed without the redundant cross products a generic
    /// `mul(a, a)` would repeat: each off-diagonal term `a[i] * a[j]`
    /// (`i != j`) appears exactly twice in the expansion, so each row of
    /// cross products is built once and then doubled via a single
    /// left-shift-by-one before being folded in, rather than doubling each
    /// term individually.
    pub fn square(a: &Bignum) -> Result<Bignum> {
        if a.is_zero() {
            return Ok(Bignum::zero());
        }
        let mut ans = Bignum::with_capacity(a.size * 2)?;
        ans.size = a.size * 2;
        for i in 0..a.size {
            let (hi, lo) = widen_mul(a.data[i], a.data[i]);
            ans.data[2 * i] = lo;
            ans.data[2 * i + 1] = hi;
        }
        ans.normalize();

        let mut cross = Bignum::with_capacity(a.size + 1)?;
        for i in 0..a.size.saturating_sub(1) {
            cross.set_zero();
            let mut carry = 0u8;
            let mut overlap: crate::limb::Limb = 0;
            for j in (i + 1)..a.size {
                let (hi, lo) = widen_mul(a.data[j], a.data[i]);
                let (sum, c) = add_with_carry(lo, overlap, carry);
                cross.data[j] = sum;
                carry = c;
                overlap = hi;
            }
            cross.data[a.size] = overlap + carry as crate::limb::Limb;
            cross.size = a.size + 1;
            cross.normalize();
            if cross.is_zero() {
                continue;
            }
            cross.shl_assign(1)?;
            mult_add(&cross, i, &mut ans)?;
        }
        ans.normalize();
        Ok(ans)
    }
}

/// `*out += a << (offset limbs)`, growing `out` as needed. Shared by
/// `mul`'s row accumulation and `square`'s doubled cross-product rows.
fn mult_add(a: &Bignum, offset: usize, out: &mut Bignum) -> Result<()> {
    if a.is_zero() {
        return Ok(());
    }
    let needed = a.size + offset;
    out.ensure_capacity(needed)?;
    let mut carry = 0u8;
    for ai in 0..a.size {
        let oi = offset + ai;
        let (sum, c) = add_with_carry(out.data[oi], a.data[ai], carry);
        out.data[oi] = sum;
        carry = c;
    }
    let mut oi = offset + a.size;
    while carry != 0 {
        out.ensure_capacity(oi + 1)?;
        let (sum, c) = add_with_carry(out.data[oi], 0, carry);
        out.data[oi] = sum;
        carry = c;
        oi += 1;
    }
    out.size = out.size.max(needed).max(oi);
    out.normalize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn mul_by_zero_is_zero() {
        let a = Bignum::from_u64(12345).unwrap();
        let zero = Bignum::zero();
        assert!(Bignum::mul(&a, &zero).unwrap().is_zero());
    }

    #[test]
    fn mul_crosses_limb_boundary() {
        let a = Bignum::from_u64(crate::limb::LIMB_MAX as u64).unwrap();
        let b = Bignum::from_u64(2).unwrap();
        let product = Bignum::mul(&a, &b).unwrap();
        assert_eq!(product.size(), 2);
    }

    #[test]
    fn square_matches_self_times_self() {
        let a = Bignum::from_u64(123_456_789).unwrap();
        assert_eq!(Bignum::square(&a).unwrap(), Bignum::mul(&a, &a).unwrap());
    }

    #[quickcheck]
    fn square_matches_mul_property(a: u32) -> bool {
        let a = Bignum::from_u64(a as u64).unwrap();
        Bignum::square(&a).unwrap() == Bignum::mul(&a, &a).unwrap()
    }

    #[quickcheck]
    fn mul_is_commutative(a: u32, b: u32) -> bool {
        let a = Bignum::from_u64(a as u64).unwrap();
        let b = Bignum::from_u64(b as u64).unwrap();
        Bignum::mul(&a, &b).unwrap() == Bignum::mul(&b, &a).unwrap()
    }
}
