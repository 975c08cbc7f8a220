//! Fibonacci drivers, both expressed purely in terms of the public UBN
//! operations above.

use crate::bignum::Bignum;
use crate::error::Result;

/// `F(k)` by the linear recurrence: maintain `(F(i-1), F(i))` and always
/// sum the *current* pair into whichever slot was least recently written,
/// alternating the write target by the parity of `i` — the same `fib[i &
/// 1] = fib[0] + fib[1]` shape `fib_sequence` uses, rendered as two named
/// bindings instead of a two-element array.
pub fn fib_linear(k: u64) -> Result<Bignum> {
    let mut a = Bignum::from_u64(0)?; // F(0)
    let mut b = Bignum::from_u64(1)?; // F(1)
    if k == 0 {
        return Ok(a);
    }
    for i in 2..=k {
        let sum = Bignum::add(&a, &b)?;
        if i % 2 == 0 {
            a = sum;
        } else {
            b = sum;
        }
    }
    Ok(if k % 2 == 0 { a } else { b })
}

/// `F(k)` by fast doubling: walk the bits of `k` from the second-highest
/// down, carrying `(F(n-1), F(n))`, and at each step derive the pair for
/// `2n` via `F(2n-1) = F(n-1)^2 + F(n)^2` and `F(2n) = F(n) * (2*F(n-1) +
/// F(n))`; when the current bit of `k` is set, extend the pair to `2n+1`
/// with one more addition. This mirrors `fib_fast`'s bit walk, one binary
/// digit of `k` consumed per iteration.
pub fn fib_doubling(k: u64) -> Result<Bignum> {
    if k == 0 {
        return Bignum::from_u64(0);
    }
    let mut f_prev = Bignum::from_u64(0)?; // F(n-1)
    let mut f_curr = Bignum::from_u64(1)?; // F(n)

    let highest_bit = 63 - k.leading_zeros();
    for bit in (0..highest_bit).rev() {
        let prev_sq = Bignum::square(&f_prev)?;
        let curr_sq = Bignum::square(&f_curr)?;
        let f_2n_minus_1 = Bignum::add(&prev_sq, &curr_sq)?;

        let mut two_prev_plus_curr = f_prev.clone();
        two_prev_plus_curr.shl_assign(1)?;
        two_prev_plus_curr.add_assign(&f_curr)?;
        let f_2n = Bignum::mul(&two_prev_plus_curr, &f_curr)?;

        if (k >> bit) & 1 == 1 {
            let f_2n_plus_1 = Bignum::add(&f_2n_minus_1, &f_2n)?;
            f_prev = f_2n;
            f_curr = f_2n_plus_1;
        } else {
            f_prev = f_2n_minus_1;
            f_curr = f_2n;
        }
    }
    Ok(f_curr)
}
