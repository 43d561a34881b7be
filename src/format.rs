use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was empty or held a character other than a decimal digit.
    #[error("input must be a non-empty string of decimal digits")]
    InvalidDigits,

    /// The numeric value does not fit in an unsigned 64-bit integer.
    #[error("value is too large to format")]
    Overflow,
}

fn parse_digits(input: &str) -> Result<u64, FormatError> {
    // `u64::from_str` also admits a leading `+`, which is not a digit here.
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatError::InvalidDigits);
    }
    input.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => FormatError::Overflow,
        _ => FormatError::InvalidDigits,
    })
}

/// Renders a digits-only CPF as `DDD.DDD.DDD-DD`, zero-padding to eleven
/// digits. Leading zeros are significant; no checksum is applied.
pub fn format_cpf(digits: &str) -> Result<String, FormatError> {
    let value = parse_digits(digits)?;
    let padded = format!("{value:011}");
    let (head, check) = padded.split_at(padded.len() - 2);
    let (head, third) = head.split_at(head.len() - 3);
    let (first, second) = head.split_at(head.len() - 3);
    Ok(format!("{first}.{second}.{third}-{check}"))
}

/// Renders a digits-only CNPJ as `DD.DDD.DDD/DDDD-DD`, zero-padding to
/// fourteen digits. Leading zeros are significant; no checksum is applied.
pub fn format_cnpj(digits: &str) -> Result<String, FormatError> {
    let value = parse_digits(digits)?;
    let padded = format!("{value:014}");
    let (head, check) = padded.split_at(padded.len() - 2);
    let (head, branch) = head.split_at(head.len() - 4);
    let (head, third) = head.split_at(head.len() - 3);
    let (first, second) = head.split_at(head.len() - 3);
    Ok(format!("{first}.{second}.{third}/{branch}-{check}"))
}
