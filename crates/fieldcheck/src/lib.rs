//! Fieldcheck
//!
//! Validation engine for a simple registration form (name, surname,
//! email, age). On each submit trigger it reads every bound input from an
//! [`ElementStore`], applies the field's rule, and writes the verdict
//! message into the bound status element; the age verdict additionally
//! gates the result panel's visibility.
//!
//! The engine never touches a real document directly. The host supplies
//! an [`ElementStore`] — a browser-backed one in `fieldcheck-wasm`, or
//! [`MemoryStore`] in tests and demos — and an explicit [`FormBindings`]
//! configuration mapping logical fields to element ids.
//!
//! ```
//! use fieldcheck::{FormBindings, FormValidator, MemoryStore};
//!
//! let bindings = FormBindings::default();
//! let store = MemoryStore::for_bindings(&bindings);
//! store.set_value("name-input", "Al");
//!
//! let validator = FormValidator::bind(bindings, &store).unwrap();
//! let report = validator.on_submit(&store).unwrap();
//! assert!(report.name.valid);
//! ```

pub mod bindings;
pub mod field;
pub mod store;
pub mod validator;

pub use bindings::FormBindings;
pub use field::{Field, FieldReport};
pub use store::{DomError, ElementStore, MemoryStore};
pub use validator::{FormValidator, SubmitReport};
