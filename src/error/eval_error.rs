use std::fmt;

/// The operation layer that rejected a symbol.
///
/// The arithmetic layer speaks of "operations", the extended layer of
/// "actions"; the distinction only shows up in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// `+ - * /` applied with an operand.
    Arithmetic,
    /// `!` and the digit powers `0`-`9`.
    Action,
    /// The `A` / `P` characteristic queries.
    Characteristic,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "Operation"),
            Self::Action | Self::Characteristic => write!(f, "Action"),
        }
    }
}

/// The numeric domain an operation requires of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Factorial accepts the closed interval `[0, 10]`, checked before
    /// truncation.
    Factorial,
    /// Characteristic queries need a truncated value of at least 1.
    Characteristic,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factorial => write!(f, "[0, 10]"),
            Self::Characteristic => write!(f, "an integer part of at least 1"),
        }
    }
}

/// Represents all errors an operation on the register can produce.
///
/// Every error is raised before the register is written, so a failed call
/// never leaves a partially updated value behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// An arithmetic operation was requested without an operand.
    #[error("Value cannot be null.")]
    InvalidOperand,
    /// Division where the operand compares equal to zero (either sign).
    #[error("Cannot divide by zero.")]
    DivisionByZero,
    /// The symbol is not part of the layer's recognized set.
    #[error("{layer} not supported: '{symbol}'.")]
    UnsupportedOperation {
        /// The rejected symbol.
        symbol: char,
        /// The layer that was asked to interpret it.
        layer:  Layer,
    },
    /// The register lies outside the domain the operation accepts.
    #[error("Number not in area: {value} is outside {domain}.")]
    OutOfRange {
        /// The register value at the time of the call.
        value:  f64,
        /// The domain that was violated.
        domain: Domain,
    },
    /// A power action was requested while the register is negative.
    #[error("Negative number: {value} cannot be raised to a digit power.")]
    NegativeOperand {
        /// The register value at the time of the call.
        value: f64,
    },
}

/// Field-less category of an [`EvalError`].
///
/// Useful when a caller only cares which rule was broken, not the values
/// involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOperand,
    DivisionByZero,
    UnsupportedOperation,
    OutOfRange,
    NegativeOperand,
}

impl EvalError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use tally::error::{ErrorKind, EvalError};
    ///
    /// assert_eq!(EvalError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperand => ErrorKind::InvalidOperand,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NegativeOperand { .. } => ErrorKind::NegativeOperand,
        }
    }

    pub(crate) const fn unsupported(symbol: char, layer: Layer) -> Self {
        Self::UnsupportedOperation { symbol, layer }
    }
}
