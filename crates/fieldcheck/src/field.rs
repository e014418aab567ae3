// File: src/field.rs
// Purpose: The four form fields, their rules, and their verdict messages

use serde::Serialize;

use fieldcheck_validation::{has_min_length, is_positive_number, matches_email_shape};

/// Minimum length (UTF-16 code units) for name and surname.
const MIN_NAME_LENGTH: usize = 2;

/// The four fields of the registration form, in submit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Surname,
    Email,
    Age,
}

impl Field {
    /// Fixed evaluation order for the submit trigger.
    pub const ORDER: [Field; 4] = [Field::Name, Field::Surname, Field::Email, Field::Age];

    /// Logical field name, used in logs and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Email => "email",
            Field::Age => "age",
        }
    }

    /// Applies this field's rule to a raw value.
    pub fn check(self, raw: &str) -> bool {
        match self {
            Field::Name | Field::Surname => has_min_length(raw, MIN_NAME_LENGTH),
            Field::Email => matches_email_shape(raw),
            Field::Age => is_positive_number(raw),
        }
    }

    /// Verdict message for this field.
    pub fn message(self, valid: bool) -> &'static str {
        match (self, valid) {
            (Field::Name, true) => "Name OK!!",
            (Field::Name, false) => "Enter a valid name",
            (Field::Surname, true) => "Surname OK!!",
            (Field::Surname, false) => "Enter a valid surname",
            (Field::Email, true) => "Email OK!!",
            (Field::Email, false) => "The email is not valid",
            (Field::Age, true) => "Age OK!!",
            (Field::Age, false) => "Enter a valid age",
        }
    }

    /// Evaluates the rule and pairs the verdict with its message.
    pub fn report(self, raw: &str) -> FieldReport {
        let valid = self.check(raw);
        FieldReport {
            field: self,
            valid,
            message: self.message(valid),
        }
    }
}

/// Outcome of one field evaluation: the verdict plus the message written
/// to the field's status element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: Field,
    pub valid: bool,
    pub message: &'static str,
}
