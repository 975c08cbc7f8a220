//! Addition and subtraction.
//!
//! Both operate limb-by-limb at matching indices, so unlike the shift
//! routine neither needs a particular iteration order to stay aliasing-safe:
//! `out[i]` only ever depends on `a[i]`/`b[i]`, never on a neighboring index.
//! `add_assign`/`sub_assign` take `self` as one operand and the output,
//! which covers the common case of the output aliasing one input (the other
//! operand is a distinct `&Bignum` by construction); `add`/`sub` cover the
//! case where the output aliases neither.

use crate::bignum::Bignum;
use crate::error::{Result, UbnError};
use crate::limb::add_with_carry;
use std::cmp::Ordering;

impl Bignum {
    /// `self += other`.
    pub fn add_assign(&mut self, other: &Bignum) -> Result<()> {
        let new_size = Self::add_result_size(self, other);
        self.ensure_capacity(new_size)?;

        let min = self.size.min(other.size);
        let mut carry = 0u8;
        for i in 0..min {
            let (sum, c) = add_with_carry(self.data[i], other.limb_at(i), carry);
            self.data[i] = sum;
            carry = c;
        }
        let remain = self.size.max(other.size);
        for i in min..remain {
            let a_limb = if i < self.size { self.data[i] } else { 0 };
            let (sum, c) = add_with_carry(a_limb, other.limb_at(i), carry);
            self.data[i] = sum;
            carry = c;
        }
        self.size = remain;
        if carry != 0 {
            self.data[remain] = 1;
            self.size = remain + 1;
        }
        self.normalize();
        Ok(())
    }

    /// `a + b`, building the result in a freshly allocated bignum.
    pub fn add(a: &Bignum, b: &Bignum) -> Result<Bignum> {
        let mut out = a.clone();
        out.add_assign(b)?;
        Ok(out)
    }

    fn add_result_size(a: &Bignum, b: &Bignum) -> usize {
        if a.is_zero() || b.is_zero() {
            return a.size.max(b.size);
        }
        let longer_overflows = (a.size >= b.size && a.clz() == Some(0))
            || (b.size >= a.size && b.clz() == Some(0));
        if longer_overflows {
            a.size.max(b.size) + 1
        } else {
            a.size.max(b.size)
        }
    }

    /// `self -= other`. Fails with [`UbnError::InvalidOperand`] if
    /// `self < other`; on failure `self` is left unchanged, matching spec's
    /// "replace the output only on success" error policy.
    pub fn sub_assign(&mut self, other: &Bignum) -> Result<()> {
        match self.compare(other) {
            Ordering::Less => Err(UbnError::InvalidOperand("a < b")),
            Ordering::Equal => {
                self.set_zero();
                Ok(())
            }
            Ordering::Greater => {
                let a_size = self.size;
                // self - other == self + !other + 1, discarding the final
                // carry out of the top limb (two's-complement subtraction).
                let mut carry = 1u8;
                for i in 0..other.size {
                    let (sum, c) = add_with_carry(self.data[i], !other.limb_at(i), carry);
                    self.data[i] = sum;
                    carry = c;
                }
                for i in other.size..a_size {
                    let (sum, c) = add_with_carry(self.data[i], crate::limb::LIMB_MAX, carry);
                    self.data[i] = sum;
                    carry = c;
                }
                self.size = a_size;
                self.normalize();
                Ok(())
            }
        }
    }

    /// `a - b`, building the result in a freshly allocated bignum. Fails
    /// with [`UbnError::InvalidOperand`] if `a < b`.
    pub fn sub(a: &Bignum, b: &Bignum) -> Result<Bignum> {
        let mut out = a.clone();
        out.sub_assign(b)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_across_limb_boundary_carries() {
        let a = Bignum::from_u64(crate::limb::LIMB_MAX as u64).unwrap();
        let b = Bignum::from_u64(1).unwrap();
        let sum = Bignum::add(&a, &b).unwrap();
        assert_eq!(sum.size(), 2);
        assert_eq!(sum.limbs(), [0, 1]);
    }

    #[test]
    fn add_assign_with_output_aliasing_an_input() {
        let mut a = Bignum::from_u64(10).unwrap();
        let b = Bignum::from_u64(32).unwrap();
        a.add_assign(&b).unwrap();
        assert_eq!(a, Bignum::from_u64(42).unwrap());
    }

    #[test]
    fn sub_of_equal_values_is_zero() {
        let mut a = Bignum::from_u64(42).unwrap();
        let b = Bignum::from_u64(42).unwrap();
        a.sub_assign(&b).unwrap();
        assert!(a.is_zero());
    }

    #[test]
    fn sub_rejects_negative_result() {
        let mut a = Bignum::from_u64(1).unwrap();
        let b = Bignum::from_u64(2).unwrap();
        let before = a.clone();
        let err = a.sub_assign(&b).unwrap_err();
        assert_eq!(err, UbnError::InvalidOperand("a < b"));
        assert_eq!(a, before);
    }

    #[quickcheck]
    fn add_then_sub_is_identity(a: u32, b: u32) -> bool {
        let a = Bignum::from_u64(a as u64).unwrap();
        let b = Bignum::from_u64(b as u64).unwrap();
        let sum = Bignum::add(&a, &b).unwrap();
        Bignum::sub(&sum, &b).unwrap() == a
    }

    #[quickcheck]
    fn add_is_commutative(a: u32, b: u32) -> bool {
        let a = Bignum::from_u64(a as u64).unwrap();
        let b = Bignum::from_u64(b as u64).unwrap();
        Bignum::add(&a, &b).unwrap() == Bignum::add(&b, &a).unwrap()
    }
}
