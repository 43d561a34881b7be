use crate::normalization::normalize;
use crate::validators::{CnpjChecksum, CpfChecksum, Validator};

/// Dispatches between CPF and CNPJ on the normalized digit count. The two
/// lengths are disjoint, so no ambiguity handling is needed.
pub struct CpfOrCnpj;

impl Validator for CpfOrCnpj {
    fn is_valid(&self, input: &str) -> bool {
        let digits = normalize(input);
        match digits.len() {
            11 => CpfChecksum.is_valid(&digits),
            14 => CnpjChecksum.is_valid(&digits),
            _ => false,
        }
    }
}

/// Validates either document kind, accepting punctuated or digits-only input.
pub fn is_cpf_or_cnpj(input: &str) -> bool {
    CpfOrCnpj.is_valid(input)
}
