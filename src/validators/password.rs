use crate::validators::Validator;

// Minimum-occurrence checks over a candidate password, one per character
// class. Presence of a value is asserted separately; see the rule layer
// for the blank-value policy.

/// At least `min_occurrences` lowercase letters (`a-z`).
pub struct PasswordLowercaseLetters {
    pub min_occurrences: usize,
}

impl Validator for PasswordLowercaseLetters {
    fn is_valid(&self, input: &str) -> bool {
        count_matching(input, |c| c.is_ascii_lowercase()) >= self.min_occurrences
    }
}

/// At least `min_occurrences` capital letters (`A-Z`).
pub struct PasswordCapitalLetters {
    pub min_occurrences: usize,
}

impl Validator for PasswordCapitalLetters {
    fn is_valid(&self, input: &str) -> bool {
        count_matching(input, |c| c.is_ascii_uppercase()) >= self.min_occurrences
    }
}

/// At least `min_occurrences` decimal digits (`0-9`).
pub struct PasswordDigits {
    pub min_occurrences: usize,
}

impl Validator for PasswordDigits {
    fn is_valid(&self, input: &str) -> bool {
        count_matching(input, |c| c.is_ascii_digit()) >= self.min_occurrences
    }
}

fn count_matching(input: &str, class: impl Fn(char) -> bool) -> usize {
    input.chars().filter(|&c| class(c)).count()
}
