//! Fieldcheck WASM
//!
//! WebAssembly bindings for the fieldcheck engine. Wraps the browser
//! document in an [`ElementStore`] and wires the submit button to one
//! click handler running the full validation trigger.
//!
//! ```javascript
//! import init, { mount, mountWith } from './fieldcheck_wasm.js';
//! await init();
//! mount();                                  // stock element ids
//! mountWith({ nameInput: 'fullname' });     // or override bindings
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use fieldcheck::{DomError, ElementStore, FormBindings, FormValidator};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// [`ElementStore`] backed by the live browser document.
pub struct DocumentStore {
    document: Document,
}

impl DocumentStore {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn require(&self, id: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::ElementNotFound { id: id.to_string() })
    }
}

impl ElementStore for DocumentStore {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn value(&self, id: &str) -> Result<String, DomError> {
        let element = self.require(id)?;
        // Inputs expose .value; anything else falls back to its text.
        Ok(match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => input.value(),
            Err(other) => other.text_content().unwrap_or_default(),
        })
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), DomError> {
        self.require(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), DomError> {
        let element: HtmlElement =
            self.require(id)?
                .dyn_into()
                .map_err(|_| DomError::Unsupported {
                    id: id.to_string(),
                    operation: "style.display",
                })?;
        let style = element.style();
        // Showing removes the inline override so the stylesheet default
        // applies again, rather than forcing a remembered display value.
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        result.map_err(|_| DomError::Unsupported {
            id: id.to_string(),
            operation: "style.display",
        })
    }
}

/// Mounts the validator with the stock element ids.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_bindings(FormBindings::default())
}

/// Mounts the validator with bindings overridden from a JS config
/// object (camelCase keys, missing entries keep their defaults).
#[wasm_bindgen(js_name = mountWith)]
pub fn mount_with(config: JsValue) -> Result<(), JsValue> {
    mount_bindings(parse_bindings(config)?)
}

/// Runs one full validation cycle immediately, without attaching a
/// listener, and returns the submit report as a JS object. Pass
/// `undefined` for stock bindings.
#[wasm_bindgen(js_name = runValidation)]
pub fn run_validation(config: JsValue) -> Result<JsValue, JsValue> {
    let bindings = parse_bindings(config)?;
    let store = DocumentStore::new(page_document()?);
    let validator = FormValidator::bind(bindings, &store).map_err(dom_err_to_js)?;
    let report = validator.on_submit(&store).map_err(dom_err_to_js)?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_bindings(config: JsValue) -> Result<FormBindings, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormBindings::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse bindings: {e}")))
}

fn page_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document to mount on"))
}

fn mount_bindings(bindings: FormBindings) -> Result<(), JsValue> {
    let document = page_document()?;
    let store = DocumentStore::new(document.clone());
    let submit_id = bindings.submit_button.clone();

    // Fail fast: every bound element must exist before any listener is
    // attached; a missing id surfaces here as a JS error naming it.
    let validator = FormValidator::bind(bindings, &store).map_err(dom_err_to_js)?;

    let button = document.get_element_by_id(&submit_id).ok_or_else(|| {
        dom_err_to_js(DomError::ElementNotFound {
            id: submit_id.clone(),
        })
    })?;

    let handler = Closure::<dyn FnMut()>::new(move || {
        // An element vanishing after mount is reported, not unwound.
        if let Err(err) = validator.on_submit(&store) {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
        }
    });
    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|_| JsValue::from_str("failed to attach click listener"))?;
    // The listener lives for the page.
    handler.forget();
    Ok(())
}

fn dom_err_to_js(err: DomError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
