//! Arbitrary-precision unsigned bignum engine (`Bignum`) and the two
//! Fibonacci drivers built on top of it, modeled on a Linux character-device
//! Fibonacci generator: a read returns `F(k)` as a decimal string, a write
//! selects which algorithm computes it.

pub mod arith;
pub mod bignum;
pub mod decimal;
pub mod div;
pub mod error;
pub mod fib;
pub mod limb;
pub mod mul;
pub mod shift;

pub use bignum::{Bignum, Div};
pub use error::{Result, UbnError};
pub use fib::{fib_doubling, fib_linear};
