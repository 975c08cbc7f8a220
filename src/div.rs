//! Division: bignum-by-bignum long division for large divisors, and a fast
//! single-limb division by `LTEN` used by the decimal converter.
//!
//! The bignum-by-bignum path is intentionally not a generic divide-by-
//! anything routine; it exists only to peel `SUPERTEN`-sized blocks off a
//! bignum in `decimal.rs`, so it always receives a sizeable divisor and
//! produces its answer through the shared `Div` scratch bundle.
//!
//! `div_by_lten` does one pass over the dividend's limbs per division:
//! since the divisor fits in one limb, each dividend limb is visited
//! exactly once (most significant first) carrying a remainder that never
//! grows past `LTEN`, the textbook short-division algorithm for dividing a
//! multi-limb value by a single-limb one.

use crate::bignum::{Bignum, Div};
use crate::error::{Result, UbnError};
use crate::limb::{DoubleLimb, Limb, LIMB_BITS, LTEN};
use std::cmp::Ordering;

/// `div.dividend = quotient * divisor + remainder`: divides `div.dividend`
/// by `divisor` in place, leaving the quotient in `div.quotient` and the
/// remainder in `div.dividend`. `div.subtrahend` is scratch.
///
/// Each iteration finds the largest shift `s` such that
/// `divisor << s <= dividend`, subtracts that aligned value, and records
/// bit `s` of the quotient — the same shift-and-subtract long division the
/// original `ubignum_divby_ten` uses, generalized from a fixed divisor of
/// ten to an arbitrary (large) divisor.
pub fn long_divide(div: &mut Div, divisor: &Bignum) -> Result<()> {
    if divisor.is_zero() {
        return Err(UbnError::InvalidOperand("division by zero"));
    }
    div.quotient.set_zero();
    if div.dividend.compare(divisor) == Ordering::Less {
        return Ok(());
    }

    let w = LIMB_BITS as usize;
    let mut iterations: u64 = 0;
    while div.dividend.compare(divisor) != Ordering::Less {
        let s = div.dividend.bit_length() - divisor.bit_length();
        div.subtrahend.assign(divisor)?;
        div.subtrahend.shl_assign(s)?;
        let shift = if div.subtrahend.compare(&div.dividend) == Ordering::Greater {
            div.subtrahend.assign(divisor)?;
            div.subtrahend.shl_assign(s - 1)?;
            s - 1
        } else {
            s
        };

        let limb_idx = shift / w;
        let bit_idx = (shift % w) as u32;
        div.quotient.ensure_capacity(limb_idx + 1)?;
        div.quotient.data[limb_idx] |= 1 << bit_idx;
        div.quotient.size = div.quotient.size.max(limb_idx + 1);

        div.dividend.sub_assign(&div.subtrahend)?;
        iterations += 1;
    }
    div.quotient.normalize();
    log::trace!("long division converged after {iterations} iterations");
    Ok(())
}

/// Divide `dividend` by the single-limb constant `LTEN`, writing the
/// quotient into `quotient` and returning the remainder (always `< LTEN`).
pub fn div_by_lten(dividend: &Bignum, quotient: &mut Bignum) -> Result<Limb> {
    if dividend.is_zero() {
        quotient.set_zero();
        return Ok(0);
    }
    quotient.recap(dividend.size)?;
    quotient.set_zero();
    let mut remainder: Limb = 0;
    for i in (0..dividend.size).rev() {
        let window = ((remainder as DoubleLimb) << LIMB_BITS) | dividend.data[i] as DoubleLimb;
        quotient.data[i] = (window / LTEN as DoubleLimb) as Limb;
        remainder = (window % LTEN as DoubleLimb) as Limb;
    }
    quotient.size = dividend.size;
    quotient.normalize();
    Ok(remainder)
}
