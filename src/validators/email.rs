use crate::patterns::EMAIL_ADDRESS;
use crate::validators::Validator;

/// E-mail address predicate. The pattern only admits lowercase local and
/// domain parts; a dotted-quad IP literal may stand in for the domain.
pub struct EmailAddress;

impl Validator for EmailAddress {
    fn is_valid(&self, input: &str) -> bool {
        EMAIL_ADDRESS.is_match(input)
    }
}

pub fn is_email(input: &str) -> bool {
    EmailAddress.is_valid(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_addresses() {
        let valid = [
            "user@example.com",
            "user.name-x_1@sub.example.co",
            "nuv.tools@nuv.tools",
            "u@[192.168.0.1]",
        ];
        for address in valid {
            assert!(is_email(address), "{address}");
        }
    }

    #[test]
    fn invalid_addresses() {
        let invalid = [
            "",
            "erro",
            "@example.com",
            "user@example",
            "user@@example.com",
            "user@example.com ",
            // matching is case-sensitive
            "User@example.com",
            ".user@example.com",
        ];
        for address in invalid {
            assert!(!is_email(address), "{address}");
        }
    }
}
