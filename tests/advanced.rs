use pretty_assertions::assert_eq;
use tally::{
    Action, AdvancedCalculator, Calculator, Characteristic, Digit,
    error::{Domain, ErrorKind, EvalError, Layer},
};

fn assert_action(start: f64, action: char, expected: f64) {
    let mut calc = AdvancedCalculator::with_value(start);
    if let Err(e) = calc.apply_action(action) {
        panic!("{start} '{action}' failed: {e}");
    }
    assert_eq!(calc.current_value(), expected, "{start} '{action}'");
}

fn assert_action_rejected(start: f64, action: char, kind: ErrorKind) {
    let mut calc = AdvancedCalculator::with_value(start);
    match calc.apply_action(action) {
        Ok(()) => panic!("{start} '{action}' succeeded but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{start} '{action}'"),
    }
    assert_eq!(calc.current_value().to_bits(), start.to_bits(), "register was modified");
}

fn characteristic(start: f64, kind: char) -> Result<bool, EvalError> {
    let calc = AdvancedCalculator::with_value(start);
    let result = calc.has_characteristic(kind);
    assert_eq!(calc.current_value().to_bits(), start.to_bits(), "register was modified");
    result
}

#[test]
fn starts_at_zero_and_shares_arithmetic() {
    let mut calc = AdvancedCalculator::new();
    assert_eq!(calc.current_value(), 0.0);

    calc.set_current_value(10.0);
    calc.apply(Some(2.0), '*').unwrap();
    assert_eq!(calc.current_value(), 20.0);
    assert_eq!(calc.base().current_value(), 20.0);

    assert_eq!(calc.apply(Some(0.0), '/'), Err(EvalError::DivisionByZero));
    assert_eq!(calc.apply(None, '!'), Err(EvalError::InvalidOperand));
}

#[test]
fn built_from_a_calculator() {
    let calc = AdvancedCalculator::from(Calculator::with_value(4.0));
    assert_eq!(calc.current_value(), 4.0);
}

#[test]
fn factorial() {
    assert_action(0.0, '!', 1.0);
    assert_action(2.0, '!', 2.0);
    assert_action(5.0, '!', 120.0);
    assert_action(10.0, '!', 3_628_800.0);
}

#[test]
fn factorial_truncates_after_the_range_check() {
    assert_action(9.9, '!', 362_880.0);
    assert_action(0.1, '!', 1.0);
    assert_action(0.999_999, '!', 1.0);
    assert_action(-0.0, '!', 1.0);
}

#[test]
fn factorial_outside_domain() {
    for start in [-5.0, -1.0, -0.001, -f64::MIN_POSITIVE, 10.001, 10.9, 11.0, 20.0, f64::MAX,
                  f64::INFINITY]
    {
        assert_action_rejected(start, '!', ErrorKind::OutOfRange);
    }
}

#[test]
fn factorial_of_nan_is_one() {
    assert_action(f64::NAN, '!', 1.0);
}

#[test]
fn digit_powers() {
    assert_action(2.0, '2', 4.0);
    assert_action(2.0, '3', 8.0);
    assert_action(0.0, '5', 0.0);
    assert_action(0.0, '0', 1.0);
    assert_action(0.0, '9', 0.0);
    assert_action(5.0, '0', 1.0);
    assert_action(1.0, '9', 1.0);
    assert_action(10_000.0, '2', 100_000_000.0);
    assert_action(-0.0, '2', 0.0);
}

#[test]
fn digit_powers_may_overflow() {
    assert_action(1e200, '2', f64::INFINITY);
    assert_action(f64::INFINITY, '0', 1.0);
}

#[test]
fn digit_power_of_nan_stays_nan() {
    let mut calc = AdvancedCalculator::with_value(f64::NAN);
    calc.apply_action('2').unwrap();
    assert!(calc.current_value().is_nan());
}

#[test]
fn negative_base_is_rejected_for_every_digit() {
    for digit in '0'..='9' {
        assert_action_rejected(-1.0, digit, ErrorKind::NegativeOperand);
    }
    assert_action_rejected(-0.000_001, '9', ErrorKind::NegativeOperand);
    assert_action_rejected(-f64::MAX, '0', ErrorKind::NegativeOperand);
    assert_action_rejected(-999_999.0, '8', ErrorKind::NegativeOperand);
}

#[test]
fn unsupported_actions() {
    for action in [',', '.', '?', 'a', '%', '@', '^', ';', '[', ']', '$', '#', '&', '|', '~',
                   '`', 'A', 'P', '+']
    {
        assert_action_rejected(3.0, action, ErrorKind::UnsupportedOperation);
    }
}

#[test]
fn unsupported_action_wins_over_register_domain() {
    assert_action_rejected(-5.0, '?', ErrorKind::UnsupportedOperation);
}

#[test]
fn action_error_messages() {
    let mut calc = AdvancedCalculator::with_value(-2.0);
    assert_eq!(calc.apply_action('x').unwrap_err().to_string(), "Action not supported: 'x'.");
    assert_eq!(calc.apply_action('!'),
               Err(EvalError::OutOfRange { value:  -2.0,
                                           domain: Domain::Factorial, }));
    assert_eq!(calc.apply_action('4'), Err(EvalError::NegativeOperand { value: -2.0 }));
}

#[test]
fn armstrong_numbers() {
    for n in [1.0, 9.0, 153.0, 370.0, 1634.0, 9474.0, 153.9] {
        assert_eq!(characteristic(n, 'A'), Ok(true), "{n}");
    }
    for n in [10.0, 200.0, 450.0, 9475.0] {
        assert_eq!(characteristic(n, 'A'), Ok(false), "{n}");
    }
}

#[test]
fn characteristics_above_the_32_bit_range() {
    // 4679307774 is a ten-digit Armstrong number; it must not saturate to i32::MAX.
    assert_eq!(characteristic(4_679_307_774.0, 'A'), Ok(true));
    assert_eq!(characteristic(4_679_307_775.0, 'A'), Ok(false));
    assert_eq!(characteristic(f64::from(i32::MAX), 'A'), Ok(false));
    assert_eq!(characteristic(8_589_869_056.0, 'P'), Ok(true));
}

#[test]
fn perfect_numbers() {
    for n in [6.0, 28.0, 496.0, 8128.0, 28.5] {
        assert_eq!(characteristic(n, 'P'), Ok(true), "{n}");
    }
    for n in [1.0, 2.0, 21.0, 50.0, 27.0] {
        assert_eq!(characteristic(n, 'P'), Ok(false), "{n}");
    }
}

#[test]
fn characteristic_domain() {
    for (start, kind) in [(0.5, 'A'), (0.999, 'P'), (-1.0, 'P'), (-5.0, 'A'), (0.0, 'P'),
                          (-f64::MAX, 'A'), (f64::NAN, 'A'), (f64::NEG_INFINITY, 'P')]
    {
        assert_eq!(characteristic(start, kind).map_err(|e| e.kind()),
                   Err(ErrorKind::OutOfRange),
                   "{start} '{kind}'");
    }
}

#[test]
fn characteristic_domain_is_checked_before_the_symbol() {
    for (start, kind) in [(0.5, '5'), (-1.0, '0'), (0.999, '!'), (0.0, '%')] {
        assert_eq!(characteristic(start, kind).map_err(|e| e.kind()),
                   Err(ErrorKind::OutOfRange),
                   "{start} '{kind}'");
    }
}

#[test]
fn unsupported_characteristics() {
    for (start, kind) in [(1.0, 'B'), (5.0, 'b'), (124.5, '4'), (13.6, '9'), (1.05, '!'),
                          (100.0001, '#'), (6.0, 'p')]
    {
        assert_eq!(characteristic(start, kind),
                   Err(EvalError::UnsupportedOperation { symbol: kind,
                                                         layer:  Layer::Characteristic, }),
                   "{start} '{kind}'");
    }
    assert_eq!(characteristic(1.0, 'B').unwrap_err().to_string(), "Action not supported: 'B'.");
}

#[test]
fn typed_entry_points() {
    let mut calc = AdvancedCalculator::with_value(3.0);
    calc.perform(Action::Factorial).unwrap();
    assert_eq!(calc.current_value(), 6.0);
    assert_eq!(calc.query(Characteristic::Perfect), Ok(true));
    assert_eq!(calc.query(Characteristic::Armstrong), Ok(true));

    calc.perform(Action::power(2).unwrap()).unwrap();
    assert_eq!(calc.current_value(), 36.0);

    assert_eq!(Action::power(10), None);
    assert_eq!(Digit::new(10), None);
    assert_eq!(Action::power(7).map(Action::symbol), Some('7'));
    assert_eq!(Characteristic::try_from('A').map(|c| c.to_string()), Ok("A".to_string()));
}
