use std::fmt;

use crate::error::{EvalError, Layer};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Returns the symbol this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    /// Parses an arithmetic operator symbol.
    ///
    /// # Example
    /// ```
    /// use tally::{calculator::symbol::Operator, error::ErrorKind};
    ///
    /// assert_eq!(Operator::try_from('*'), Ok(Operator::Mul));
    /// assert_eq!(Operator::try_from('%').unwrap_err().kind(),
    ///            ErrorKind::UnsupportedOperation);
    /// ```
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(EvalError::unsupported(symbol, Layer::Arithmetic)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, the exponent of a power action.
///
/// Only `0..=9` can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` unless `value` is a single decimal digit.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A unary action that overwrites the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `!`: factorial of the truncated register.
    Factorial,
    /// `0`-`9`: raise the register to the given digit.
    Power(Digit),
}

impl Action {
    /// Builds a power action, or `None` if `exponent` is not a single digit.
    #[must_use]
    pub const fn power(exponent: u8) -> Option<Self> {
        match Digit::new(exponent) {
            Some(digit) => Some(Self::Power(digit)),
            None => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Factorial => '!',
            Self::Power(digit) => (b'0' + digit.get()) as char,
        }
    }
}

impl TryFrom<char> for Action {
    type Error = EvalError;

    /// Parses an action symbol: `!` or an ASCII digit.
    ///
    /// # Example
    /// ```
    /// use tally::calculator::symbol::Action;
    ///
    /// assert_eq!(Action::try_from('!'), Ok(Action::Factorial));
    /// assert_eq!(Action::try_from('3'), Ok(Action::power(3).unwrap()));
    /// assert!(Action::try_from('A').is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '!' => Ok(Self::Factorial),
            '0'..='9' => Ok(Self::Power(Digit(symbol as u8 - b'0'))),
            _ => Err(EvalError::unsupported(symbol, Layer::Action)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A numeric property that can be tested without touching the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// `A`: equal to the sum of its digits, each raised to the digit count.
    Armstrong,
    /// `P`: equal to the sum of its proper divisors.
    Perfect,
}

impl Characteristic {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Armstrong => 'A',
            Self::Perfect => 'P',
        }
    }
}

impl TryFrom<char> for Characteristic {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Self::Armstrong),
            'P' => Ok(Self::Perfect),
            _ => Err(EvalError::unsupported(symbol, Layer::Characteristic)),
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
