//! Base-2 → base-10 conversion.
//!
//! Three tiers, chosen by magnitude:
//! - **small** (one limb): the native integer formatter already does this.
//! - **medium**: peel `LTEN`-sized (16- or 8-digit) chunks off the value
//!   with the single-limb fast division, least-significant chunk first,
//!   then print them back in the opposite order.
//! - **large**: first split the value into `SUPERTEN = 10^1024`-sized
//!   blocks with the bignum-by-bignum long divider, most-significant block
//!   last produced; then run the medium algorithm on each block. Peeling
//!   `SUPERTEN` blocks first means the expensive bignum-by-bignum division
//!   only runs `O(digits / 1024)` times instead of once per `LTEN` chunk.

use crate::bignum::{Bignum, Div};
use crate::div::{div_by_lten, long_divide};
use crate::error::Result;
use crate::limb::LTEN_EXP;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Decimal digits per `SUPERTEN` block.
const SUPERTEN_EXP: usize = 1024;

/// `SUPERTEN = LTEN^(SUPERTEN_EXP / LTEN_EXP)`, built by repeated squaring
/// from `LTEN` rather than by repeated multiplication — `SUPERTEN_EXP /
/// LTEN_EXP` is a power of two on both supported limb widths (64 and 16,
/// or 8 and 128), so `log2` squarings reach it exactly.
fn compute_superten() -> Result<Bignum> {
    let mut s = Bignum::from_u64(crate::limb::LTEN as u64)?;
    let steps = ((SUPERTEN_EXP / LTEN_EXP as usize) as u32).ilog2();
    for _ in 0..steps {
        s = Bignum::square(&s)?;
    }
    Ok(s)
}

/// `compute_superten`, computed once and cached for the life of the
/// process — every other call clones the cached value instead of
/// repeating the squaring chain.
fn superten() -> Result<Bignum> {
    static SUPERTEN: OnceLock<Result<Bignum>> = OnceLock::new();
    SUPERTEN.get_or_init(compute_superten).clone()
}

/// Render `n` as a decimal string with no leading zeros (`"0"` for zero).
pub fn to_decimal(n: &Bignum) -> Result<String> {
    if n.is_zero() {
        return Ok("0".to_string());
    }
    if n.size() == 1 {
        return Ok(n.limbs()[0].to_string());
    }
    let superten = superten()?;
    if n.compare(&superten) == Ordering::Less {
        return format_medium(n);
    }
    format_large(n, &superten)
}

/// Peel `LTEN`-digit chunks off `n`, each zero-padded, then print them
/// back most-significant first; the most significant chunk has its leading
/// zeros stripped since it is the start of the whole number.
fn format_medium(n: &Bignum) -> Result<String> {
    let width = LTEN_EXP as usize;
    let mut dividend = n.clone();
    let mut quotient = Bignum::with_capacity(dividend.size.max(1))?;
    let mut chunks: Vec<String> = Vec::new();
    while !dividend.is_zero() {
        let remainder = div_by_lten(&dividend, &mut quotient)?;
        chunks.push(format!("{remainder:0width$}"));
        std::mem::swap(&mut dividend, &mut quotient);
    }
    let top = chunks.pop().expect("n is non-zero, so at least one chunk was produced");
    let top_trimmed = top.trim_start_matches('0');
    let mut out = String::with_capacity(top.len() + chunks.len() * width);
    out.push_str(if top_trimmed.is_empty() { "0" } else { top_trimmed });
    for chunk in chunks.iter().rev() {
        out.push_str(chunk);
    }
    Ok(out)
}

/// Like `format_medium`, but always emits exactly `total_digits` digits
/// (zero-padded on the left, no stripping) — used for every `SUPERTEN`
/// block except the most significant one.
fn format_fixed_width(n: &Bignum, total_digits: usize) -> Result<String> {
    let width = LTEN_EXP as usize;
    debug_assert_eq!(total_digits % width, 0);
    let mut dividend = n.clone();
    let mut quotient = Bignum::with_capacity(dividend.size.max(1))?;
    let mut out = String::with_capacity(total_digits);
    let mut chunks: Vec<String> = Vec::new();
    let mut produced = 0;
    while produced < total_digits {
        let remainder = div_by_lten(&dividend, &mut quotient)?;
        chunks.push(format!("{remainder:0width$}"));
        produced += width;
        std::mem::swap(&mut dividend, &mut quotient);
    }
    for chunk in chunks.iter().rev() {
        out.push_str(chunk);
    }
    Ok(out)
}

/// Split `n` into `SUPERTEN`-sized blocks via repeated long division, then
/// render each block with the medium algorithm, concatenating in natural
/// order with leading zeros stripped only from the most significant block.
fn format_large(n: &Bignum, superten: &Bignum) -> Result<String> {
    let mut value = n.clone();
    let mut blocks: Vec<Bignum> = Vec::new();
    let mut div = Div::new(value.size)?;
    while value.compare(superten) != Ordering::Less {
        div.seed(&value)?;
        long_divide(&mut div, superten)?;
        blocks.push(div.dividend.clone());
        value = div.quotient.clone();
    }
    blocks.push(value);

    let top_block = blocks.pop().expect("at least the final quotient was pushed");
    let mut out = format_medium(&top_block)?;
    for block in blocks.iter().rev() {
        out.push_str(&format_fixed_width(block, SUPERTEN_EXP)?);
    }
    Ok(out)
}

impl std::fmt::Display for Bignum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match to_decimal(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

/// Parse a decimal string by the schoolbook `n = n * 10 + digit` recurrence
/// (the inverse of `to_decimal`, not the hierarchical algorithm itself:
/// parsing isn't on the hot path the way rendering a computed Fibonacci
/// result is, so there's no equivalent need for a block-wise fast path).
impl std::str::FromStr for Bignum {
    type Err = crate::error::UbnError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(crate::error::UbnError::InvalidOperand("not a decimal string"));
        }
        let ten = Bignum::from_u64(10)?;
        let mut n = Bignum::from_u64(0)?;
        for b in s.bytes() {
            let digit = Bignum::from_u64((b - b'0') as u64)?;
            n = Bignum::mul(&n, &ten)?;
            n.add_assign(&digit)?;
        }
        Ok(n)
    }
}
