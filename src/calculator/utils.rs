/// Computes `n!` with checked multiplication.
///
/// Returns `None` if the result does not fit in a `u64`. `0! = 1`.
///
/// ## Example
/// ```
/// use tally::calculator::utils::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(10), Some(3_628_800));
/// assert_eq!(factorial(21), None);
/// ```
#[must_use]
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, u64::checked_mul)
}

/// Raises `base` to a small non-negative integer power by repeated
/// multiplication.
///
/// `power(x, 0)` is `1.0` for every `x`, including `0.0` and NaN. Overflow to
/// infinity is not an error.
///
/// ## Example
/// ```
/// use tally::calculator::utils::power;
///
/// assert_eq!(power(2.0, 3), 8.0);
/// assert_eq!(power(0.0, 0), 1.0);
/// assert_eq!(power(1e200, 2), f64::INFINITY);
/// ```
#[must_use]
pub fn power(base: f64, exponent: u8) -> f64 {
    (0..exponent).fold(1.0, |acc, _| base * acc)
}

/// Returns the number of decimal digits in `n` (`0` has one digit).
#[must_use]
pub const fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Checks whether `n` equals the sum of its decimal digits, each raised to
/// the number of digits.
///
/// The sum is accumulated in `u128`, so it cannot overflow for any `u64`.
///
/// ## Example
/// ```
/// use tally::calculator::utils::is_armstrong;
///
/// assert!(is_armstrong(153)); // 1³ + 5³ + 3³
/// assert!(is_armstrong(9474));
/// assert!(!is_armstrong(200));
/// ```
#[must_use]
pub fn is_armstrong(n: u64) -> bool {
    let digits = digit_count(n);

    let mut rest = n;
    let mut sum = 0u128;
    loop {
        sum += u128::from(rest % 10).pow(digits);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    sum == u128::from(n)
}

/// Checks whether `n` equals the sum of its divisors in `[1, n / 2]`.
///
/// Divisors are collected in pairs `(i, n / i)` up to `√n`, which yields the
/// same sum as scanning the whole half-range. `1` is never perfect. The loop
/// runs `√n` times, so inputs near `u64::MAX` take seconds.
///
/// ## Example
/// ```
/// use tally::calculator::utils::is_perfect;
///
/// assert!(is_perfect(28)); // 1 + 2 + 4 + 7 + 14
/// assert!(is_perfect(8128));
/// assert!(!is_perfect(1));
/// assert!(!is_perfect(50));
/// ```
#[must_use]
pub fn is_perfect(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut sum = 1u128;
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            sum += u128::from(i);
            let pair = n / i;
            if pair != i {
                sum += u128::from(pair);
            }
        }
        i += 1;
    }

    sum == u128::from(n)
}
