use crate::{
    calculator::{
        core::{AdvancedCalculator, EvalResult},
        symbol::{Action, Characteristic},
        utils::{factorial, is_armstrong, is_perfect, power},
    },
    error::{Domain, EvalError},
    util::num::{f64_trunc_to_i64, f64_trunc_to_u64, u64_to_f64_checked},
};

/// Smallest register value accepted by the factorial action.
pub const FACTORIAL_MIN: f64 = 0.0;
/// Largest register value accepted by the factorial action, before truncation.
pub const FACTORIAL_MAX: f64 = 10.0;

impl AdvancedCalculator {
    /// Applies a binary arithmetic operation on the shared register.
    ///
    /// Delegates to [`Calculator::apply`](crate::calculator::core::Calculator::apply)
    /// with the same contract.
    pub fn apply(&mut self, operand: Option<f64>, operator: char) -> EvalResult<()> {
        self.base.apply(operand, operator)
    }

    /// Applies a unary action to the register and stores the result.
    ///
    /// - `!`: factorial. The untruncated register must lie in `[0, 10]`; it is
    ///   then truncated toward zero, so `9.9` yields `9! = 362880`.
    /// - `0`-`9`: raise the register to that digit. A negative register is
    ///   rejected whichever digit is given; `0` yields `1.0` for every base.
    ///
    /// # Errors
    /// - [`EvalError::UnsupportedOperation`] for any other symbol.
    /// - [`EvalError::OutOfRange`] for `!` below 0 or above 10. A NaN register
    ///   is not rejected; it truncates to 0 and becomes `0! = 1.0`.
    /// - [`EvalError::NegativeOperand`] for a digit with a negative register.
    ///
    /// # Example
    /// ```
    /// use tally::{calculator::core::AdvancedCalculator, error::ErrorKind};
    ///
    /// let mut calc = AdvancedCalculator::with_value(2.0);
    /// calc.apply_action('3').unwrap();
    /// assert_eq!(calc.current_value(), 8.0);
    ///
    /// calc.set_current_value(-1.0);
    /// let err = calc.apply_action('3').unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NegativeOperand);
    /// assert_eq!(calc.current_value(), -1.0);
    /// ```
    #[tracing::instrument(level = "trace", skip(self), fields(register = self.current_value()))]
    pub fn apply_action(&mut self, action: char) -> EvalResult<()> {
        let action = Action::try_from(action).inspect_err(|e| tracing::debug!("rejected: {e}"))?;
        self.perform(action)
    }

    /// Applies an already-parsed action. See [`Self::apply_action`].
    ///
    /// # Errors
    /// [`EvalError::OutOfRange`] or [`EvalError::NegativeOperand`] when the
    /// register is outside the action's domain.
    pub fn perform(&mut self, action: Action) -> EvalResult<()> {
        let value = self.current_value();

        let result = match action {
            Action::Factorial => Self::factorial_of(value)?,
            Action::Power(exponent) => {
                if value < 0.0 {
                    tracing::debug!(register = value, %action, "rejected: negative base");
                    return Err(EvalError::NegativeOperand { value });
                }
                power(value, exponent.get())
            },
        };

        tracing::trace!(from = value, to = result, %action, "register updated");
        self.set_current_value(result);
        Ok(())
    }

    /// Tests the truncated register for a numeric characteristic.
    ///
    /// The register is never modified. The truncated value must be at least
    /// `1`; that check runs before the symbol is looked at, so a register of
    /// `0.0` reports [`EvalError::OutOfRange`] even for an unknown symbol.
    ///
    /// - `A`: Armstrong number.
    /// - `P`: perfect number.
    ///
    /// The register truncates to an `i64`, saturating, so values above
    /// `i32::MAX` are tested as themselves. The perfect-number test scans
    /// divisors up to `√n`: cheap for everyday values, but around 3·10⁹
    /// iterations for a register near `i64::MAX`.
    ///
    /// # Errors
    /// - [`EvalError::OutOfRange`] when the truncated register is below 1.
    /// - [`EvalError::UnsupportedOperation`] for a symbol other than `A`/`P`.
    ///
    /// # Example
    /// ```
    /// use tally::calculator::core::AdvancedCalculator;
    ///
    /// let calc = AdvancedCalculator::with_value(153.7);
    /// assert_eq!(calc.has_characteristic('A'), Ok(true));
    /// assert_eq!(calc.has_characteristic('P'), Ok(false));
    /// assert_eq!(calc.current_value(), 153.7);
    /// ```
    #[tracing::instrument(level = "trace", skip(self), fields(register = self.current_value()))]
    pub fn has_characteristic(&self, kind: char) -> EvalResult<bool> {
        let n = self.characteristic_operand()?;
        let characteristic =
            Characteristic::try_from(kind).inspect_err(|e| tracing::debug!("rejected: {e}"))?;
        Ok(Self::test(characteristic, n))
    }

    /// Tests an already-parsed characteristic. See
    /// [`Self::has_characteristic`].
    ///
    /// # Errors
    /// [`EvalError::OutOfRange`] when the truncated register is below 1.
    pub fn query(&self, characteristic: Characteristic) -> EvalResult<bool> {
        let n = self.characteristic_operand()?;
        Ok(Self::test(characteristic, n))
    }

    fn test(characteristic: Characteristic, n: u64) -> bool {
        match characteristic {
            Characteristic::Armstrong => is_armstrong(n),
            Characteristic::Perfect => is_perfect(n),
        }
    }

    #[allow(clippy::manual_range_contains)]
    fn factorial_of(value: f64) -> EvalResult<f64> {
        let out_of_range = EvalError::OutOfRange { value,
                                                   domain: Domain::Factorial };

        // NaN is neither below nor above the bounds; it truncates to 0 and yields 1.
        if value < FACTORIAL_MIN || value > FACTORIAL_MAX {
            tracing::debug!(register = value, "rejected: factorial outside [0, 10]");
            return Err(out_of_range);
        }

        let Some(product) = factorial(f64_trunc_to_u64(value)) else {
            return Err(out_of_range);
        };
        u64_to_f64_checked(product, out_of_range)
    }

    fn characteristic_operand(&self) -> EvalResult<u64> {
        let value = self.current_value();

        match u64::try_from(f64_trunc_to_i64(value)) {
            Ok(n) if n >= 1 => Ok(n),
            _ => {
                tracing::debug!(register = value, "rejected: characteristic below 1");
                Err(EvalError::OutOfRange { value,
                                            domain: Domain::Characteristic })
            },
        }
    }
}
