//! Decimal rounding that works on the decimal representation of a value.
//!
//! Scaling by `10^decimals`, rounding and dividing back loses precision once
//! `decimals` approaches the 15-17 significant digits an `f64` carries, and
//! can overflow for large values. Rounding the shortest round-trip decimal
//! string instead returns the input untouched whenever it already has no more
//! than `decimals` fractional digits.

use geogeometry_types::Coordinate;

/// Round `value` to `decimals` fractional digits, half away from zero.
///
/// Rounding is applied to the shortest decimal string that parses back to
/// `value`, so `2.675` rounds to `2.68` even though its binary value is
/// slightly below the midpoint. Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```
/// use geogeometry::round_to_decimals;
///
/// assert_eq!(round_to_decimals(1.005, 2), 1.01);
/// assert_eq!(round_to_decimals(-0.125, 2), -0.13);
///
/// // More decimals than the value carries: untouched
/// assert_eq!(round_to_decimals(0.1234567891111112, 17), 0.1234567891111112);
/// ```
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Display for f64 is the shortest round-trip form and never uses an exponent
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let decimals = decimals as usize;
    if frac_part.len() <= decimals {
        return value;
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes()[decimals] >= b'5' && !increment(&mut digits) {
        digits.insert(0, 1);
        int_len += 1;
    }

    let mut rounded = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        rounded.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            rounded.push('.');
        }
        rounded.push(char::from(b'0' + digit));
    }

    rounded.parse().unwrap_or(value)
}

/// Add one to the last digit. Returns false when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Round both components of a coordinate.
///
/// Seven decimals resolve roughly a centimeter on the ground.
pub fn round_coordinate(coordinate: &Coordinate, decimals: u32) -> Coordinate {
    Coordinate::new(
        round_to_decimals(coordinate.lat(), decimals),
        round_to_decimals(coordinate.lon(), decimals),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_precision_is_preserved() {
        assert_eq!(round_to_decimals(0.1234567891111112, 17), 0.1234567891111112);
        assert_eq!(round_to_decimals(0.1234567891111112, 16), 0.1234567891111112);
        assert_eq!(round_to_decimals(0.1234567891111112, 300), 0.1234567891111112);
        assert_eq!(round_to_decimals(1e300, 2), 1e300);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_to_decimals(0.125, 2), 0.13);
        assert_eq!(round_to_decimals(-0.125, 2), -0.13);
        assert_eq!(round_to_decimals(2.675, 2), 2.68);
        assert_eq!(round_to_decimals(1.005, 2), 1.01);
        assert_eq!(round_to_decimals(0.5, 0), 1.0);
        assert_eq!(round_to_decimals(-2.5, 0), -3.0);
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_to_decimals(0.1234567891111112, 4), 0.1235);
        assert_eq!(round_to_decimals(0.1234567891111112, 3), 0.123);
        assert_eq!(round_to_decimals(123.456, 0), 123.0);
        assert_eq!(round_to_decimals(1e-20, 5), 0.0);
    }

    #[test]
    fn test_carry_into_integer_part() {
        assert_eq!(round_to_decimals(9.999, 2), 10.0);
        assert_eq!(round_to_decimals(99.95, 1), 100.0);
        assert_eq!(round_to_decimals(-9.96, 1), -10.0);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert!(round_to_decimals(f64::NAN, 3).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 3), f64::INFINITY);
        assert_eq!(round_to_decimals(f64::NEG_INFINITY, 3), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_coordinate() {
        let c = Coordinate::new(52.530564123, -13.394964987);
        assert_eq!(
            round_coordinate(&c, 4),
            Coordinate::new(52.5306, -13.395)
        );
    }
}
