use crate::normalization::normalize;
use crate::validators::{all_digits_equal, check_digit, digit_values, Validator};

pub struct CnpjChecksum;

const CNPJ_DIGIT_COUNT: usize = 14;
const FIRST_DIGIT_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_DIGIT_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid(&self, input: &str) -> bool {
        let digits = digit_values(&normalize(input));
        if digits.len() != CNPJ_DIGIT_COUNT {
            return false;
        }
        // All-zero input passes the mod-11 arithmetic, so repeated-digit
        // sequences need an explicit rejection.
        if all_digits_equal(&digits) {
            return false;
        }

        let mut base = digits[..12].to_vec();
        let first = check_digit(&base, FIRST_DIGIT_WEIGHTS);
        base.push(first);
        let second = check_digit(&base, SECOND_DIGIT_WEIGHTS);

        first == digits[12] && second == digits[13]
    }
}

/// Validates a CNPJ, accepting punctuated or digits-only input.
pub fn is_cnpj(input: &str) -> bool {
    CnpjChecksum.is_valid(input)
}
