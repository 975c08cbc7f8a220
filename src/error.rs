//! Error type shared by every fallible UBN operation.
//!
//! Every public mutating operation returns `Result<(), Error>` (or
//! `Result<T, Error>` for constructors); on `Err` the operand(s) passed in
//! are left unchanged except where the operation's documentation says
//! otherwise (subtraction and long division replace their output only on
//! success).

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UbnError {
    /// Storage could not be obtained or grown.
    #[error("allocation failure")]
    Alloc,
    /// An operand violated a precondition the operation requires.
    #[error("invalid operand: {0}")]
    InvalidOperand(&'static str),
}

pub type Result<T> = std::result::Result<T, UbnError>;
