//! Left shift.
//!
//! `shl_assign` writes the shifted limbs from the most significant index
//! down to the least significant one: since the target index for limb `i`
//! is always `i + chunk_shift >= i`, processing high limbs first never
//! clobbers a source limb the loop still needs to read.

use crate::error::Result;
use crate::limb::LIMB_BITS;

impl crate::bignum::Bignum {
    /// `self <<= d` (in place; `self` is simultaneously the only input and
    /// the output).
    pub fn shl_assign(&mut self, d: usize) -> Result<()> {
        if self.is_zero() || d == 0 {
            return Ok(());
        }
        let w = LIMB_BITS as usize;
        let chunk_shift = d / w;
        let bit_shift = (d % w) as u32;
        let clz = self.clz().expect("checked non-zero above");
        let extra = if bit_shift > clz { 1 } else { 0 };
        let old_size = self.size;
        let new_size = old_size + chunk_shift + extra;
        self.ensure_capacity(new_size)?;

        if bit_shift == 0 {
            for i in (0..old_size).rev() {
                self.data[i + chunk_shift] = self.data[i];
            }
        } else {
            if extra == 1 {
                self.data[old_size + chunk_shift] =
                    self.data[old_size - 1] >> (LIMB_BITS - bit_shift);
            }
            for i in (1..old_size).rev() {
                self.data[i + chunk_shift] =
                    (self.data[i] << bit_shift) | (self.data[i - 1] >> (LIMB_BITS - bit_shift));
            }
            self.data[chunk_shift] = self.data[0] << bit_shift;
        }
        for limb in &mut self.data[..chunk_shift] {
            *limb = 0;
        }
        self.size = new_size;
        self.normalize();
        Ok(())
    }

    /// `self << d`, leaving `self` unchanged.
    pub fn shl(&self, d: usize) -> Result<Self> {
        let mut out = self.clone();
        out.shl_assign(d)?;
        Ok(out)
    }
}
