use crate::{
    calculator::{
        core::{Calculator, EvalResult},
        symbol::Operator,
    },
    error::EvalError,
};

impl Calculator {
    /// Applies `operator` between the register and `operand`, storing the
    /// result in the register.
    ///
    /// Checks run in a fixed order: an absent operand is rejected first,
    /// whatever the operator; then the operator symbol must be one of
    /// `+ - * /`; then division rejects a zero operand. Non-finite operands
    /// follow IEEE-754 arithmetic. The register is unchanged on every error.
    ///
    /// # Parameters
    /// - `operand`: The right-hand value. `None` is an error, not a no-op.
    /// - `operator`: One of `+`, `-`, `*`, `/`.
    ///
    /// # Errors
    /// - [`EvalError::InvalidOperand`] if `operand` is `None`.
    /// - [`EvalError::UnsupportedOperation`] for any other symbol.
    /// - [`EvalError::DivisionByZero`] for `/` with `0.0` or `-0.0`.
    ///
    /// # Example
    /// ```
    /// use tally::{calculator::core::Calculator, error::EvalError};
    ///
    /// let mut calc = Calculator::with_value(10.0);
    /// calc.apply(Some(4.0), '-').unwrap();
    /// assert_eq!(calc.current_value(), 6.0);
    ///
    /// assert_eq!(calc.apply(Some(-0.0), '/'), Err(EvalError::DivisionByZero));
    /// assert_eq!(calc.apply(None, '?'), Err(EvalError::InvalidOperand));
    /// assert_eq!(calc.current_value(), 6.0);
    /// ```
    #[tracing::instrument(level = "trace", skip(self), fields(register = self.current_value()))]
    pub fn apply(&mut self, operand: Option<f64>, operator: char) -> EvalResult<()> {
        let Some(operand) = operand else {
            tracing::debug!(%operator, "rejected: operand is absent");
            return Err(EvalError::InvalidOperand);
        };

        let operator = Operator::try_from(operator).inspect_err(|e| tracing::debug!("rejected: {e}"))?;
        self.apply_operator(operand, operator)
    }

    /// Applies an already-parsed operator.
    ///
    /// Only the division-by-zero rule remains to be checked here; the operand
    /// is compared with IEEE-754 equality, so both zeros are rejected.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] for [`Operator::Div`] with a zero
    /// operand.
    pub fn apply_operator(&mut self, operand: f64, operator: Operator) -> EvalResult<()> {
        let current = self.register.get();

        let result = match operator {
            Operator::Add => current + operand,
            Operator::Sub => current - operand,
            Operator::Mul => current * operand,
            Operator::Div => {
                if operand == 0.0 {
                    tracing::debug!(register = current, "rejected: division by zero");
                    return Err(EvalError::DivisionByZero);
                }
                current / operand
            },
        };

        tracing::trace!(from = current, to = result, %operator, operand, "register updated");
        self.register.set(result);
        Ok(())
    }
}
