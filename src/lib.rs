//! # tally
//!
//! tally is a stateful numeric evaluator written in Rust.
//! It holds a single running value, the register, and applies operations to it
//! one at a time. Illegal input is reported as a typed [`error::EvalError`]
//! and the register is left exactly as it was.
//!
//! Two layers share the register:
//! - [`Calculator`] applies `+ - * /` with an operand.
//! - [`AdvancedCalculator`] adds factorial (`!`), digit powers (`0`-`9`) and
//!   the Armstrong (`A`) / perfect-number (`P`) queries.
//!
//! ```
//! use tally::{AdvancedCalculator, error::ErrorKind};
//!
//! let mut calc = AdvancedCalculator::new();
//! calc.apply(Some(28.0), '+').unwrap();
//! assert_eq!(calc.has_characteristic('P'), Ok(true));
//!
//! let err = calc.apply_action('!').unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(calc.current_value(), 28.0);
//! ```
//!
//! Operations emit `tracing` events (rejections at `debug`, register updates
//! at `trace`); install a subscriber in the embedding application to see them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The register and the operations applied to it.
///
/// This module holds the evaluator proper: the core state, the typed
/// operator symbols, and the arithmetic and extended operation layers that
/// validate their input and update the register.
///
/// # Responsibilities
/// - Defines the register and the two calculators built around it.
/// - Parses operator, action and characteristic symbols.
/// - Validates every input before the register is written.
pub mod calculator;
/// Provides the error type for every operation.
///
/// This module defines the error taxonomy: absent operand, division by zero,
/// unsupported symbol, out-of-range register and negative power base. Errors
/// carry the rejected symbol or register value for reporting.
pub mod error;
/// General utilities for safe numeric conversion.
///
/// Truncation from the floating-point register into integers, and the exact
/// conversion of integer results back into it.
pub mod util;

pub use calculator::{
    core::{AdvancedCalculator, Calculator, EvalResult, Register},
    symbol::{Action, Characteristic, Digit, Operator},
};
pub use error::EvalError;
