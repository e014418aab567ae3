//! Browser tests for the document-backed store and the submit path.
//!
//! Run with `wasm-pack test --headless --chrome crates/fieldcheck-wasm`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlInputElement};

use fieldcheck::{DomError, FormBindings, FormValidator};
use fieldcheck_wasm::DocumentStore;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Builds the form skeleton: inputs, status paragraphs, button, panel.
fn install_form(bindings: &FormBindings) {
    let doc = document();
    let body = doc.body().unwrap();
    for id in bindings.all_ids() {
        if doc.get_element_by_id(id).is_some() {
            continue;
        }
        let tag = if id.ends_with("-input") {
            "input"
        } else if id == bindings.submit_button {
            "button"
        } else {
            "p"
        };
        let element = doc.create_element(tag).unwrap();
        element.set_id(id);
        body.append_child(&element).unwrap();
    }
}

fn set_input(id: &str, value: &str) {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

fn status_text(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn submit_writes_statuses_and_shows_panel() {
    let bindings = FormBindings::default();
    install_form(&bindings);
    set_input("name-input", "Al");
    set_input("surname-input", "Smith");
    set_input("email-input", "al@smith.com");
    set_input("age-input", "25");

    let store = DocumentStore::new(document());
    let validator = FormValidator::bind(bindings, &store).unwrap();
    let report = validator.on_submit(&store).unwrap();

    assert!(report.all_valid());
    assert_eq!(status_text("name-status"), "Name OK!!");
    assert_eq!(status_text("surname-status"), "Surname OK!!");
    assert_eq!(status_text("email-status"), "Email OK!!");
    assert_eq!(status_text("age-status"), "Age OK!!");

    let panel = document().get_element_by_id("result-panel").unwrap();
    let panel: web_sys::HtmlElement = panel.dyn_into().unwrap();
    assert_eq!(panel.style().get_property_value("display").unwrap(), "");
}

#[wasm_bindgen_test]
fn invalid_age_hides_panel_until_corrected() {
    let bindings = FormBindings::default();
    install_form(&bindings);
    set_input("name-input", "Al");
    set_input("surname-input", "Smith");
    set_input("email-input", "al@smith.com");
    set_input("age-input", "0");

    let store = DocumentStore::new(document());
    let validator = FormValidator::bind(bindings, &store).unwrap();

    validator.on_submit(&store).unwrap();
    assert_eq!(status_text("age-status"), "Enter a valid age");
    let panel = document().get_element_by_id("result-panel").unwrap();
    let panel: web_sys::HtmlElement = panel.dyn_into().unwrap();
    assert_eq!(panel.style().get_property_value("display").unwrap(), "none");

    set_input("age-input", "30");
    validator.on_submit(&store).unwrap();
    assert_eq!(status_text("age-status"), "Age OK!!");
    assert_eq!(panel.style().get_property_value("display").unwrap(), "");
}

#[wasm_bindgen_test]
fn bind_reports_missing_element() {
    let mut bindings = FormBindings::default();
    install_form(&bindings);
    bindings.email_status = "nonexistent-status".into();

    let store = DocumentStore::new(document());
    let err = FormValidator::bind(bindings, &store).unwrap_err();
    assert_eq!(
        err,
        DomError::ElementNotFound {
            id: "nonexistent-status".into()
        }
    );
}
