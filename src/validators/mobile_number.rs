use crate::normalization::normalize;
use crate::patterns::MOBILE_NUMBER;
use crate::validators::Validator;

/// Brazilian mobile number: two-digit area code, the literal prefix `9`,
/// then eight subscriber digits. Punctuation and spacing are ignored.
pub struct MobileNumber;

impl Validator for MobileNumber {
    fn is_valid(&self, input: &str) -> bool {
        MOBILE_NUMBER.is_match(&normalize(input))
    }
}

pub fn is_mobile_number(input: &str) -> bool {
    MobileNumber.is_valid(input)
}
