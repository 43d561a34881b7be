use crate::patterns::ZIP_CODE;
use crate::validators::Validator;

/// Brazilian postal code (CEP): five digits, an optional dash, three digits.
/// Matches the raw input, so other punctuation is rejected rather than
/// stripped.
pub struct ZipCode;

impl Validator for ZipCode {
    fn is_valid(&self, input: &str) -> bool {
        ZIP_CODE.is_match(input)
    }
}

pub fn is_zip_code_number(input: &str) -> bool {
    ZipCode.is_valid(input)
}
