// File: src/validator.rs
// Purpose: The form validator component and the ordered submit trigger

use tracing::{debug, info};

use crate::bindings::FormBindings;
use crate::field::{Field, FieldReport};
use crate::store::{DomError, ElementStore};

/// The form validator. Holds the element bindings; every operation takes
/// the element store explicitly, so the same validator works against any
/// host document.
#[derive(Debug, Clone)]
pub struct FormValidator {
    bindings: FormBindings,
}

impl FormValidator {
    /// Binds the validator to a store, checking up front that every bound
    /// element exists. Fails with the offending id rather than failing
    /// deep inside a later click handler.
    pub fn bind<S: ElementStore>(bindings: FormBindings, store: &S) -> Result<Self, DomError> {
        for id in bindings.all_ids() {
            if !store.contains(id) {
                return Err(DomError::not_found(id));
            }
        }
        info!("form validator bound to {} elements", bindings.all_ids().len());
        Ok(Self { bindings })
    }

    /// The element bindings this validator was constructed with.
    pub fn bindings(&self) -> &FormBindings {
        &self.bindings
    }

    /// Validates the name field and writes its status message.
    pub fn validate_name<S: ElementStore>(&self, store: &S) -> Result<FieldReport, DomError> {
        self.validate_field(Field::Name, store)
    }

    /// Validates the surname field and writes its status message.
    pub fn validate_surname<S: ElementStore>(&self, store: &S) -> Result<FieldReport, DomError> {
        self.validate_field(Field::Surname, store)
    }

    /// Validates the email field and writes its status message.
    pub fn validate_email<S: ElementStore>(&self, store: &S) -> Result<FieldReport, DomError> {
        self.validate_field(Field::Email, store)
    }

    /// Validates the age field and writes its status message. Also gates
    /// the result panel: shown when the age is valid, hidden otherwise.
    pub fn validate_age<S: ElementStore>(&self, store: &S) -> Result<FieldReport, DomError> {
        self.validate_field(Field::Age, store)
    }

    /// One read-validate-write cycle for a single field.
    fn validate_field<S: ElementStore>(
        &self,
        field: Field,
        store: &S,
    ) -> Result<FieldReport, DomError> {
        let raw = store.value(self.bindings.input_id(field))?;
        let report = field.report(&raw);
        debug!(field = field.name(), valid = report.valid, "validated");

        store.set_text(self.bindings.status_id(field), report.message)?;
        if field == Field::Age {
            store.set_visible(&self.bindings.result_panel, report.valid)?;
        }
        Ok(report)
    }

    /// The submit trigger: runs all four validations in the fixed order
    /// name, surname, email, age. No short-circuiting; every status
    /// element is rewritten on every trigger even when an earlier field
    /// is invalid.
    pub fn on_submit<S: ElementStore>(&self, store: &S) -> Result<SubmitReport, DomError> {
        // Evaluation order is the contract: Field::ORDER, no short-circuit.
        let [name, surname, email, age] = Field::ORDER;
        Ok(SubmitReport {
            name: self.validate_field(name, store)?,
            surname: self.validate_field(surname, store)?,
            email: self.validate_field(email, store)?,
            age: self.validate_field(age, store)?,
        })
    }
}

/// Outcome of one submit trigger: the four field reports in evaluation
/// order. Nothing in the engine consumes [`all_valid`]; it is the hook
/// for hosts that want an aggregate verdict.
///
/// [`all_valid`]: SubmitReport::all_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SubmitReport {
    pub name: FieldReport,
    pub surname: FieldReport,
    pub email: FieldReport,
    pub age: FieldReport,
}

impl SubmitReport {
    /// True iff all four fields validated.
    pub fn all_valid(&self) -> bool {
        self.reports().iter().all(|r| r.valid)
    }

    /// The four reports in evaluation order.
    pub fn reports(&self) -> [FieldReport; 4] {
        [self.name, self.surname, self.email, self.age]
    }
}
