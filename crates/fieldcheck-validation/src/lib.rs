//! Fieldcheck Validation Core
//!
//! Pure validation rules for the registration form fields. No DOM access,
//! no side effects; every function here is a plain predicate over a field
//! value, usable from both the host-side engine and WASM bindings.

pub mod email;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use string::*;
