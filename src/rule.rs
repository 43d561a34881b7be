use crate::validators::{
    Base64Content, CnpjChecksum, CpfChecksum, CpfOrCnpj, EmailAddress, MobileNumber, NumbersOnly,
    PasswordCapitalLetters, PasswordDigits, PasswordLowercaseLetters, Validator, ZipCode,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

/// Rule-table configuration errors, surfaced when a validator set is built.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InvalidRuleError {
    #[error("rule has an empty field name")]
    EmptyFieldName,

    #[error("{check} on field `{field}` requires a minimum of at least 1")]
    InvalidMinOccurrences { field: String, check: &'static str },
}

/// A single declarative check bound to a form field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Check {
    Required,
    Cpf,
    Cnpj,
    CpfOrCnpj,
    EmailAddress,
    MobileNumber,
    ZipCode,
    Base64Content,
    NumbersOnly,
    PasswordLowercaseLetters { min_occurrences: usize },
    PasswordCapitalLetters { min_occurrences: usize },
    PasswordDigits { min_occurrences: usize },
}

impl Validator for Check {
    fn is_valid(&self, input: &str) -> bool {
        match self {
            Check::Required => !input.trim().is_empty(),
            Check::Cpf => CpfChecksum.is_valid(input),
            Check::Cnpj => CnpjChecksum.is_valid(input),
            Check::CpfOrCnpj => CpfOrCnpj.is_valid(input),
            Check::EmailAddress => EmailAddress.is_valid(input),
            Check::MobileNumber => MobileNumber.is_valid(input),
            Check::ZipCode => ZipCode.is_valid(input),
            Check::Base64Content => Base64Content.is_valid(input),
            Check::NumbersOnly => NumbersOnly.is_valid(input),
            Check::PasswordLowercaseLetters { min_occurrences } => PasswordLowercaseLetters {
                min_occurrences: *min_occurrences,
            }
            .is_valid(input),
            Check::PasswordCapitalLetters { min_occurrences } => PasswordCapitalLetters {
                min_occurrences: *min_occurrences,
            }
            .is_valid(input),
            Check::PasswordDigits { min_occurrences } => PasswordDigits {
                min_occurrences: *min_occurrences,
            }
            .is_valid(input),
        }
    }
}

impl Check {
    /// Only `Required` fires on blank values; every other check asserts a
    /// property of a value that is present.
    pub(crate) fn applies_to_blank(&self) -> bool {
        matches!(self, Check::Required)
    }

    pub(crate) fn ensure_valid(&self, field: &str) -> Result<(), InvalidRuleError> {
        match self {
            Check::PasswordLowercaseLetters { min_occurrences }
            | Check::PasswordCapitalLetters { min_occurrences }
            | Check::PasswordDigits { min_occurrences }
                if *min_occurrences == 0 =>
            {
                Err(InvalidRuleError::InvalidMinOccurrences {
                    field: field.to_string(),
                    check: self.name(),
                })
            }
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Check::Required => "Required",
            Check::Cpf => "Cpf",
            Check::Cnpj => "Cnpj",
            Check::CpfOrCnpj => "CpfOrCnpj",
            Check::EmailAddress => "EmailAddress",
            Check::MobileNumber => "MobileNumber",
            Check::ZipCode => "ZipCode",
            Check::Base64Content => "Base64Content",
            Check::NumbersOnly => "NumbersOnly",
            Check::PasswordLowercaseLetters { .. } => "PasswordLowercaseLetters",
            Check::PasswordCapitalLetters { .. } => "PasswordCapitalLetters",
            Check::PasswordDigits { .. } => "PasswordDigits",
        }
    }

    pub(crate) fn default_message(&self, field: &str) -> String {
        match self {
            Check::Required => format!("{field} is required"),
            Check::Cpf | Check::Cnpj | Check::CpfOrCnpj => format!("{field} is not valid"),
            Check::EmailAddress => format!("{field} is not a valid e-mail address"),
            Check::MobileNumber => format!("{field} is not a valid mobile number"),
            Check::ZipCode => format!("{field} is not a valid postal code"),
            Check::Base64Content => format!("{field} is not valid Base64 content"),
            Check::NumbersOnly => format!("{field} must contain only numbers"),
            Check::PasswordLowercaseLetters { min_occurrences } => {
                format!("{field} must contain at least {min_occurrences} lowercase letters")
            }
            Check::PasswordCapitalLetters { min_occurrences } => {
                format!("{field} must contain at least {min_occurrences} capital letters")
            }
            Check::PasswordDigits { min_occurrences } => {
                format!("{field} must contain at least {min_occurrences} digits")
            }
        }
    }
}

/// Declarative validation rule for one form field.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldRule {
    pub field: String,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub checks: Vec<Check>,

    /// Replaces the default message of every check in this rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl FieldRule {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            checks: Vec::new(),
            message: None,
        }
    }

    pub fn check(&self, check: Check) -> Self {
        self.mutate_clone(|x| x.checks.push(check))
    }

    pub fn message(&self, message: &str) -> Self {
        self.mutate_clone(|x| x.message = Some(message.to_owned()))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }

    pub(crate) fn ensure_valid(&self) -> Result<(), InvalidRuleError> {
        if self.field.is_empty() {
            return Err(InvalidRuleError::EmptyFieldName);
        }
        for check in &self.checks {
            check.ensure_valid(&self.field)?;
        }
        Ok(())
    }

    /// One message per check the value fails, in declaration order.
    pub(crate) fn evaluate(&self, value: &str) -> Vec<String> {
        let blank = value.trim().is_empty();
        let mut messages = Vec::new();
        for check in &self.checks {
            if blank && !check.applies_to_blank() {
                continue;
            }
            if !check.is_valid(value) {
                messages.push(
                    self.message
                        .clone()
                        .unwrap_or_else(|| check.default_message(&self.field)),
                );
            }
        }
        messages
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_appends_checks() {
        let rule = FieldRule::new("Document")
            .check(Check::CpfOrCnpj)
            .check(Check::Required);
        assert_eq!(rule.field, "Document");
        assert_eq!(rule.checks, vec![Check::CpfOrCnpj, Check::Required]);
        assert_eq!(rule.message, None);
    }

    #[test]
    fn message_overrides_defaults() {
        let rule = FieldRule::new("Document")
            .check(Check::Cpf)
            .message("invalid document");
        assert_eq!(rule.evaluate("123"), vec!["invalid document".to_string()]);
    }

    #[test]
    fn blank_values_skip_everything_but_required() {
        let rule = FieldRule::new("Email")
            .check(Check::EmailAddress)
            .check(Check::PasswordDigits { min_occurrences: 2 });
        assert!(rule.evaluate("").is_empty());
        assert!(rule.evaluate("   ").is_empty());

        let rule = rule.check(Check::Required);
        assert_eq!(rule.evaluate(""), vec!["Email is required".to_string()]);
    }

    #[test]
    fn each_failed_check_produces_a_message() {
        let rule = FieldRule::new("Password")
            .check(Check::PasswordLowercaseLetters { min_occurrences: 2 })
            .check(Check::PasswordCapitalLetters { min_occurrences: 1 })
            .check(Check::PasswordDigits { min_occurrences: 2 });
        assert_eq!(
            rule.evaluate("abc1"),
            vec![
                "Password must contain at least 1 capital letters".to_string(),
                "Password must contain at least 2 digits".to_string(),
            ]
        );
        assert!(rule.evaluate("abC12").is_empty());
    }

    #[test]
    fn zero_minimum_is_a_config_error() {
        let rule = FieldRule::new("Password").check(Check::PasswordDigits { min_occurrences: 0 });
        assert_eq!(
            rule.ensure_valid(),
            Err(InvalidRuleError::InvalidMinOccurrences {
                field: "Password".to_string(),
                check: "PasswordDigits",
            })
        );
    }

    #[test]
    fn empty_field_name_is_a_config_error() {
        let rule = FieldRule::new("");
        assert_eq!(rule.ensure_valid(), Err(InvalidRuleError::EmptyFieldName));
    }

    #[test]
    fn serde_round_trip_keeps_the_type_tag() {
        let rule = FieldRule::new("Password")
            .check(Check::PasswordDigits { min_occurrences: 2 })
            .check(Check::Required);
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains(r#""type":"PasswordDigits""#), "{json}");
        let parsed: FieldRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn null_checks_deserialize_as_empty() {
        let json = r#"{"field": "Email", "checks": null}"#;
        let parsed: FieldRule = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, FieldRule::new("Email"));

        let json = r#"{"field": "Email"}"#;
        let parsed: FieldRule = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, FieldRule::new("Email"));
    }
}
