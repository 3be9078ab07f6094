/// Widens an `i64` to `f64` for mixed integer/real arithmetic.
///
/// Values up to `2^53` in magnitude convert exactly; larger
/// values round to the nearest representable `f64`.
///
/// ## Example
/// ```
/// use hausalang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a repetition count to a `usize`, treating negative counts as
/// zero.
///
/// ## Returns
/// - `Some(usize)`: The count, or `0` for negative input.
/// - `None`: If the count does not fit in a `usize`.
///
/// ## Example
/// ```
/// use hausalang::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), Some(3));
/// assert_eq!(repeat_count(-2), Some(0));
/// ```
#[must_use]
pub fn repeat_count(value: i64) -> Option<usize> {
    if value < 0 {
        return Some(0);
    }
    usize::try_from(value).ok()
}

/// Floored integer division: the quotient rounds towards negative infinity.
///
/// Returns `None` when `divisor` is zero or the quotient overflows
/// (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use hausalang::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, 0), None);
/// ```
#[must_use]
pub fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let quotient = dividend.checked_div(divisor)?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        return quotient.checked_sub(1);
    }
    Some(quotient)
}

/// Floored integer modulo: the result takes the sign of the divisor.
///
/// Returns `None` when `divisor` is zero.
///
/// ## Example
/// ```
/// use hausalang::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3), Some(1));
/// assert_eq!(floor_mod(-7, 3), Some(2));
/// assert_eq!(floor_mod(7, -3), Some(-2));
/// ```
#[must_use]
pub fn floor_mod(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 {
        return None;
    }
    // wrapping_rem: i64::MIN % -1 is 0 but panics with `%`.
    let remainder = dividend.wrapping_rem(divisor);
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        return Some(remainder + divisor);
    }
    Some(remainder)
}

/// Floored real modulo: the result takes the sign of the divisor.
#[must_use]
pub fn floor_mod_f64(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        remainder + divisor
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_division_rounds_down() {
        assert_eq!(floor_div(7, 2), Some(3));
        assert_eq!(floor_div(-7, 2), Some(-4));
        assert_eq!(floor_div(7, -2), Some(-4));
        assert_eq!(floor_div(-7, -2), Some(3));
        assert_eq!(floor_div(6, -3), Some(-2));
    }

    #[test]
    fn floor_division_edge_cases() {
        assert_eq!(floor_div(1, 0), None);
        assert_eq!(floor_div(i64::MIN, -1), None);
    }

    #[test]
    fn floor_modulo_follows_divisor_sign() {
        assert_eq!(floor_mod(-7, 3), Some(2));
        assert_eq!(floor_mod(7, -3), Some(-2));
        assert_eq!(floor_mod(-6, 3), Some(0));
        assert_eq!(floor_mod(i64::MIN, -1), Some(0));
        assert_eq!(floor_mod(1, 0), None);
    }

    #[test]
    fn real_modulo_follows_divisor_sign() {
        assert!((floor_mod_f64(-7.5, 2.0) - 0.5).abs() < f64::EPSILON);
        assert!((floor_mod_f64(7.5, -2.0) + 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_repeat_count_is_zero() {
        assert_eq!(repeat_count(-5), Some(0));
        assert_eq!(repeat_count(0), Some(0));
    }
}
