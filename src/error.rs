/// Evaluation errors.
///
/// Contains every error the calculators can raise: an absent operand, a
/// division by zero, an unsupported symbol, a register outside an operation's
/// domain, or a negative base for a power action.
pub mod eval_error;

pub use eval_error::{Domain, ErrorKind, EvalError, Layer};
