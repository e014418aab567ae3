//! Runs the submit flow against an in-memory document and prints the
//! status messages, once for a bad form and once for a good one.
//!
//! ```sh
//! cargo run -p fieldcheck --example registration
//! ```

use fieldcheck::{DomError, FormBindings, FormValidator, MemoryStore};

fn main() -> Result<(), DomError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let bindings = FormBindings::default();
    let store = MemoryStore::for_bindings(&bindings);
    let validator = FormValidator::bind(bindings.clone(), &store)?;

    store.set_value(&bindings.name_input, "A");
    store.set_value(&bindings.email_input, "not-an-email");
    store.set_value(&bindings.age_input, "0");
    let report = validator.on_submit(&store)?;
    print_statuses("first submit (invalid)", &bindings, &store);
    println!("all valid: {}\n", report.all_valid());

    store.set_value(&bindings.name_input, "Al");
    store.set_value(&bindings.surname_input, "Smith");
    store.set_value(&bindings.email_input, "al@smith.com");
    store.set_value(&bindings.age_input, "25");
    let report = validator.on_submit(&store)?;
    print_statuses("second submit (valid)", &bindings, &store);
    println!("all valid: {}", report.all_valid());

    Ok(())
}

fn print_statuses(label: &str, bindings: &FormBindings, store: &MemoryStore) {
    println!("-- {label} --");
    for id in [
        &bindings.name_status,
        &bindings.surname_status,
        &bindings.email_status,
        &bindings.age_status,
    ] {
        println!("  #{id}: {}", store.text(id).unwrap_or_default());
    }
    println!(
        "  #{}: visible = {}",
        bindings.result_panel,
        store.is_visible(&bindings.result_panel).unwrap_or(false)
    );
}
