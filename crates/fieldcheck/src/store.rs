// File: src/store.rs
// Purpose: The document seam - element access trait, errors, and the
//          in-memory store used by tests and demos

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Errors from the element store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("missing required element: #{id}")]
    ElementNotFound { id: String },

    #[error("element #{id} does not support {operation}")]
    Unsupported { id: String, operation: &'static str },
}

impl DomError {
    pub(crate) fn not_found(id: &str) -> Self {
        DomError::ElementNotFound { id: id.to_string() }
    }
}

/// Abstraction over the host document: elements addressed by id, with
/// the three operations the validator needs. Accessed only from the
/// single event-handling thread, so implementations may use interior
/// mutability freely.
pub trait ElementStore {
    /// Whether an element with this id exists right now.
    fn contains(&self, id: &str) -> bool;

    /// Current text value of an input element.
    fn value(&self, id: &str) -> Result<String, DomError>;

    /// Replaces the text content of an element.
    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError>;

    /// Shows or hides an element. Showing restores the element's default
    /// display, not a remembered one.
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), DomError>;
}

#[derive(Debug, Clone)]
struct Element {
    value: String,
    text: String,
    visible: bool,
}

impl Element {
    fn new() -> Self {
        Self {
            value: String::new(),
            text: String::new(),
            visible: true,
        }
    }
}

/// In-memory [`ElementStore`]: a map of element ids to value, text
/// content, and visibility. Stands in for the browser document in unit
/// tests and host-side demos; writes are observable through [`text`]
/// and [`is_visible`].
///
/// [`text`]: MemoryStore::text
/// [`is_visible`]: MemoryStore::is_visible
#[derive(Debug, Default)]
pub struct MemoryStore {
    elements: RefCell<HashMap<String, Element>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one element per id of the given
    /// bindings, all inputs empty and the panel visible.
    pub fn for_bindings(bindings: &crate::FormBindings) -> Self {
        let store = Self::new();
        for id in bindings.all_ids() {
            store.add_element(id);
        }
        store
    }

    /// Adds an empty element under `id` (replacing any existing one).
    pub fn add_element(&self, id: &str) {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), Element::new());
    }

    /// Removes an element, as if it were detached from the document.
    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    /// Sets the input value of an existing element. Panics on an unknown
    /// id; test setup should add elements first.
    pub fn set_value(&self, id: &str, value: &str) {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .unwrap_or_else(|| panic!("no element #{id} in store"));
        element.value = value.to_string();
    }

    /// Text content last written to an element.
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|e| e.text.clone())
    }

    /// Current visibility of an element.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).map(|e| e.visible)
    }
}

impl ElementStore for MemoryStore {
    fn contains(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn value(&self, id: &str) -> Result<String, DomError> {
        self.elements
            .borrow()
            .get(id)
            .map(|e| e.value.clone())
            .ok_or_else(|| DomError::not_found(id))
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements.get_mut(id).ok_or_else(|| DomError::not_found(id))?;
        element.text = text.to_string();
        Ok(())
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), DomError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements.get_mut(id).ok_or_else(|| DomError::not_found(id))?;
        element.visible = visible;
        Ok(())
    }
}
