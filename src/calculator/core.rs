use crate::error::EvalError;

/// Result type used by every operation on the register.
pub type EvalResult<T> = Result<T, EvalError>;

/// The evaluator's single running value.
///
/// A register is always defined; it starts at `0.0` and changes only through
/// an explicit [`Register::set`] or a successful operation.
///
/// # Example
/// ```
/// use tally::calculator::core::Register;
///
/// let mut register = Register::default();
/// assert_eq!(register.get(), 0.0);
///
/// register.set(4.5);
/// assert_eq!(register.get(), 4.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Register {
    value: f64,
}

impl Register {
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Creates a register holding `value`.
    #[must_use]
    pub const fn with_value(value: f64) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn get(&self) -> f64 {
        self.value
    }

    pub const fn set(&mut self, value: f64) {
        self.value = value;
    }
}

impl From<f64> for Register {
    fn from(value: f64) -> Self {
        Self::with_value(value)
    }
}

/// A calculator applying `+ - * /` between its register and an operand.
///
/// See [`Calculator::apply`] for the operation contract.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    pub(crate) register: Register,
}

impl Calculator {
    /// Creates a calculator whose register holds `0.0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { register: Register::new() }
    }

    /// Creates a calculator whose register starts at `value`.
    #[must_use]
    pub const fn with_value(value: f64) -> Self {
        Self { register: Register::with_value(value) }
    }

    /// Returns the current register value.
    #[must_use]
    pub const fn current_value(&self) -> f64 {
        self.register.get()
    }

    /// Overwrites the register. Never fails.
    pub const fn set_current_value(&mut self, value: f64) {
        self.register.set(value);
    }

    #[must_use]
    pub const fn register(&self) -> &Register {
        &self.register
    }
}

/// A calculator that adds unary actions and characteristic queries on top of
/// the arithmetic of [`Calculator`].
///
/// The arithmetic calculator is held, not inherited: both layers operate on
/// the one register owned by `base`.
///
/// # Example
/// ```
/// use tally::calculator::core::AdvancedCalculator;
///
/// let mut calc = AdvancedCalculator::with_value(5.0);
/// calc.apply_action('!').unwrap();
/// assert_eq!(calc.current_value(), 120.0);
///
/// calc.apply(Some(20.0), '/').unwrap();
/// assert_eq!(calc.current_value(), 6.0);
/// assert!(calc.has_characteristic('P').unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvancedCalculator {
    pub(crate) base: Calculator,
}

impl AdvancedCalculator {
    /// Creates an advanced calculator whose register holds `0.0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { base: Calculator::new() }
    }

    /// Creates an advanced calculator whose register starts at `value`.
    #[must_use]
    pub const fn with_value(value: f64) -> Self {
        Self { base: Calculator::with_value(value) }
    }

    #[must_use]
    pub const fn current_value(&self) -> f64 {
        self.base.current_value()
    }

    pub const fn set_current_value(&mut self, value: f64) {
        self.base.set_current_value(value);
    }

    /// Borrows the arithmetic calculator this one is built on.
    #[must_use]
    pub const fn base(&self) -> &Calculator {
        &self.base
    }
}

impl From<Calculator> for AdvancedCalculator {
    fn from(base: Calculator) -> Self {
        Self { base }
    }
}
