use crate::error::{ParseError, RuntimeError};

/// Converts a run of ASCII digits into an `i64`.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the digits exceed `i64::MAX`.
///
/// ## Parameters
/// - `digits`: One or more ASCII decimal digits.
/// - `position`: Character index of the first digit, for error reporting.
///
/// ## Example
/// ```
/// use intcalc::{error::ParseError, util::num::parse_integer_literal};
///
/// assert_eq!(parse_integer_literal("0042", 0).unwrap(), 42);
///
/// let err = parse_integer_literal("9223372036854775808", 3).unwrap_err();
/// assert!(matches!(err, ParseError::LiteralTooLarge { position: 3, .. }));
/// ```
pub fn parse_integer_literal(digits: &str, position: usize) -> Result<i64, ParseError> {
    digits.parse().map_err(|_| ParseError::LiteralTooLarge { literal: digits.to_string(),
                                                             position })
}

/// Adds two values, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the sum does not fit in an `i64`.
///
/// ## Example
/// ```
/// use intcalc::{error::RuntimeError, util::num::checked_add};
///
/// assert_eq!(checked_add(2, 3, 0).unwrap(), 5);
/// assert!(matches!(checked_add(i64::MAX, 1, 7),
///                  Err(RuntimeError::Overflow { position: 7 })));
/// ```
pub const fn checked_add(left: i64, right: i64, position: usize) -> Result<i64, RuntimeError> {
    match left.checked_add(right) {
        Some(v) => Ok(v),
        None => Err(RuntimeError::Overflow { position }),
    }
}

/// Subtracts `right` from `left`, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the difference does not fit in an
/// `i64`.
pub const fn checked_sub(left: i64, right: i64, position: usize) -> Result<i64, RuntimeError> {
    match left.checked_sub(right) {
        Some(v) => Ok(v),
        None => Err(RuntimeError::Overflow { position }),
    }
}

/// Multiplies two values, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the product does not fit in an `i64`.
pub const fn checked_mul(left: i64, right: i64, position: usize) -> Result<i64, RuntimeError> {
    match left.checked_mul(right) {
        Some(v) => Ok(v),
        None => Err(RuntimeError::Overflow { position }),
    }
}

/// Divides `left` by `right`, rounding the quotient toward negative infinity.
///
/// Rust's `/` truncates toward zero; when the operands have opposite signs
/// and the division is inexact the truncated quotient is one too large.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `right` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use intcalc::{error::RuntimeError, util::num::floor_div};
///
/// assert_eq!(floor_div(7, 2, 0).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 0).unwrap(), -4);
/// assert_eq!(floor_div(7, -2, 0).unwrap(), -4);
/// assert_eq!(floor_div(-8, 2, 0).unwrap(), -4);
///
/// let err = floor_div(4, 0, 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::DivisionByZero { position: 2 }));
/// ```
pub const fn floor_div(left: i64, right: i64, position: usize) -> Result<i64, RuntimeError> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero { position });
    }
    let Some(quotient) = left.checked_div(right) else {
        return Err(RuntimeError::Overflow { position });
    };
    if left % right != 0 && ((left < 0) != (right < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
