mod base64_content;
mod cnpj;
mod cpf;
mod cpf_or_cnpj;
mod email;
mod mobile_number;
mod numeric;
mod password;
mod zip_code;

pub use crate::validators::base64_content::{
    is_base64_content, parse_base64_data_uri, Base64Content, Base64DataUri,
};
pub use crate::validators::cnpj::{is_cnpj, CnpjChecksum};
pub use crate::validators::cpf::{is_cpf, CpfChecksum};
pub use crate::validators::cpf_or_cnpj::{is_cpf_or_cnpj, CpfOrCnpj};
pub use crate::validators::email::{is_email, EmailAddress};
pub use crate::validators::mobile_number::{is_mobile_number, MobileNumber};
pub use crate::validators::numeric::{
    has_numbers_only, is_decimal_number, is_int_number, is_long_number, NumbersOnly,
};
pub use crate::validators::password::{
    PasswordCapitalLetters, PasswordDigits, PasswordLowercaseLetters,
};
pub use crate::validators::zip_code::{is_zip_code_number, ZipCode};

/// A single validation check over a raw input string.
pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Numeric values of a digits-only string.
fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_digits_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Computes a mod-11 check digit over `digits` multiplied pairwise by
/// `weights`. A remainder below 2 maps to 0.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
