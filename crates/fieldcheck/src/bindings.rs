// File: src/bindings.rs
// Purpose: Configuration mapping logical fields to element ids

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Element-id bindings for the form.
///
/// Constructed once at startup and passed into the validator explicitly,
/// never captured as ambient state. The defaults match the stock page;
/// a host embedding the form under different ids overrides individual
/// entries (camelCase keys when supplied from a JS config object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormBindings {
    pub name_input: String,
    pub surname_input: String,
    pub email_input: String,
    pub age_input: String,
    pub name_status: String,
    pub surname_status: String,
    pub email_status: String,
    pub age_status: String,
    pub submit_button: String,
    pub result_panel: String,
}

impl Default for FormBindings {
    fn default() -> Self {
        Self {
            name_input: "name-input".into(),
            surname_input: "surname-input".into(),
            email_input: "email-input".into(),
            age_input: "age-input".into(),
            name_status: "name-status".into(),
            surname_status: "surname-status".into(),
            email_status: "email-status".into(),
            age_status: "age-status".into(),
            submit_button: "submit-button".into(),
            result_panel: "result-panel".into(),
        }
    }
}

impl FormBindings {
    /// Input element id for a field.
    pub fn input_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_input,
            Field::Surname => &self.surname_input,
            Field::Email => &self.email_input,
            Field::Age => &self.age_input,
        }
    }

    /// Status element id for a field.
    pub fn status_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_status,
            Field::Surname => &self.surname_status,
            Field::Email => &self.email_status,
            Field::Age => &self.age_status,
        }
    }

    /// Every bound id, for the fail-fast existence check.
    pub fn all_ids(&self) -> [&str; 10] {
        [
            &self.name_input,
            &self.surname_input,
            &self.email_input,
            &self.age_input,
            &self.name_status,
            &self.surname_status,
            &self.email_status,
            &self.age_status,
            &self.submit_button,
            &self.result_panel,
        ]
    }
}
