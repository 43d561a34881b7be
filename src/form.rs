use crate::rule::{FieldRule, InvalidRuleError};
use std::collections::HashMap;

/// Validation messages keyed by field identifier, the way a form edit
/// context stores them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MessageStore {
    messages: HashMap<String, Vec<String>>,
}

impl MessageStore {
    pub fn add(&mut self, field: &str, message: String) {
        self.messages.entry(field.to_owned()).or_default().push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn clear_field(&mut self, field: &str) {
        self.messages.remove(field);
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.messages.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Runs a rule table against form fields and keeps the resulting messages.
///
/// There is no framework wiring here: the host form calls [`validate_all`]
/// when submission is requested and [`field_changed`] as individual inputs
/// are edited, then renders whatever the store holds per field.
///
/// [`validate_all`]: FormValidator::validate_all
/// [`field_changed`]: FormValidator::field_changed
#[derive(Debug)]
pub struct FormValidator {
    rules: Vec<FieldRule>,
    store: MessageStore,
}

impl FormValidator {
    /// Builds a validator over a rule table, rejecting invalid rule
    /// configurations up front.
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, InvalidRuleError> {
        for rule in &rules {
            rule.ensure_valid()?;
        }
        Ok(Self {
            rules,
            store: MessageStore::default(),
        })
    }

    /// Validates every field, replacing the store contents. Fields the
    /// lookup cannot resolve validate as blank values. Returns whether the
    /// whole form is valid.
    pub fn validate_all(&mut self, mut value_of: impl FnMut(&str) -> Option<String>) -> bool {
        self.store.clear();
        for rule in &self.rules {
            let value = value_of(&rule.field).unwrap_or_default();
            for message in rule.evaluate(&value) {
                self.store.add(&rule.field, message);
            }
        }
        self.store.is_empty()
    }

    /// Revalidates a single field after an edit. Only that field's
    /// messages change; the rest of the store is left alone.
    pub fn field_changed(&mut self, field: &str, value: &str) -> &[String] {
        self.store.clear_field(field);
        let messages: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.field == field)
            .flat_map(|rule| rule.evaluate(value))
            .collect();
        for message in messages {
            self.store.add(field, message);
        }
        self.store.messages(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.store.messages(field)
    }

    /// Every message currently in the store, across all fields.
    pub fn error_messages(&self) -> Vec<&str> {
        self.store
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.store.is_empty()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}
