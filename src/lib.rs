// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod form;
mod format;
mod normalization;
mod patterns;
mod rule;
mod validators;

// This is the public API of the validation library
pub use form::{FormValidator, MessageStore};
pub use format::{format_cnpj, format_cpf, FormatError};
pub use normalization::normalize;
pub use rule::{Check, FieldRule, InvalidRuleError};
pub use validators::{
    has_numbers_only, is_base64_content, is_cnpj, is_cpf, is_cpf_or_cnpj, is_decimal_number,
    is_email, is_int_number, is_long_number, is_mobile_number, is_zip_code_number,
    parse_base64_data_uri, Base64Content, Base64DataUri, CnpjChecksum, CpfChecksum, CpfOrCnpj,
    EmailAddress, MobileNumber, NumbersOnly, PasswordCapitalLetters, PasswordDigits,
    PasswordLowercaseLetters, Validator, ZipCode,
};
