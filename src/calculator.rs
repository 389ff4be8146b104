/// Core state: the register and the two calculators that hold it.
///
/// Defines [`core::Register`], the arithmetic [`core::Calculator`] and the
/// [`core::AdvancedCalculator`], which composes a `Calculator` rather than
/// extending it.
pub mod core;

/// Typed operator, action and characteristic symbols.
///
/// Converts the single-character codes callers pass in into enums, rejecting
/// anything outside a layer's recognized set.
pub mod symbol;

/// Binary arithmetic between the register and an operand.
///
/// Handles `+`, `-`, `*` and `/`, including the absent-operand and
/// division-by-zero rules.
pub mod arithmetic;

/// Unary actions and characteristic queries on the register.
///
/// Implements factorial, digit powers, and the Armstrong and perfect-number
/// checks.
pub mod advanced;

/// Pure numeric helpers used by the extended operations.
pub mod utils;
