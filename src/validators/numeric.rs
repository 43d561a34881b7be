use crate::patterns::DECIMAL_NUMBER;
use crate::validators::Validator;

/// Non-empty input made of decimal digits only. No sign, no separators.
pub struct NumbersOnly;

impl Validator for NumbersOnly {
    fn is_valid(&self, input: &str) -> bool {
        !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
    }
}

pub fn has_numbers_only(input: &str) -> bool {
    NumbersOnly.is_valid(input)
}

/// Checks that the input parses as a 32-bit signed integer. With
/// `positive_only`, negative values are rejected as well.
pub fn is_int_number(input: &str, positive_only: bool) -> bool {
    match input.parse::<i32>() {
        Ok(value) => !positive_only || value >= 0,
        Err(_) => false,
    }
}

/// Same as [`is_int_number`] over the 64-bit range.
pub fn is_long_number(input: &str, positive_only: bool) -> bool {
    match input.parse::<i64>() {
        Ok(value) => !positive_only || value >= 0,
        Err(_) => false,
    }
}

/// Decimal number: optional sign, integer digits, optional `.` fraction.
/// Exponents, infinities and NaN are not numbers here.
pub fn is_decimal_number(input: &str, positive_only: bool) -> bool {
    if !DECIMAL_NUMBER.is_match(input) {
        return false;
    }
    match input.parse::<f64>() {
        Ok(value) => !positive_only || value >= 0.0,
        Err(_) => false,
    }
}
