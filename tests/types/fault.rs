use std::error::Error;

use outcome_rail::{Fault, FromFault, Outcome};

#[test]
fn new_fault_has_message_only() {
    let fault = Fault::new("disk full");

    assert_eq!(fault.message(), "disk full");
    assert_eq!(fault.location(), None);
    assert_eq!(fault.span(), None);
    assert_eq!(fault.to_string(), "disk full");
}

#[test]
fn display_includes_location_and_span() {
    let fault = Fault::new("disk full")
        .at(std::panic::Location::caller())
        .in_span("save_user");

    let rendered = fault.to_string();
    assert!(rendered.starts_with("disk full (at "));
    assert!(rendered.ends_with(" in span 'save_user'"));
}

#[test]
fn fault_is_std_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(Fault::new("io"));
    assert_eq!(boxed.to_string(), "io");
}

#[test]
fn formatted_panic_message_is_preserved() {
    let id = 17;
    let outcome: Outcome<(), Fault> = Outcome::success(()).map(|()| panic!("user {id} not found"));

    assert_eq!(outcome.into_error().message(), "user 17 not found");
}

#[test]
fn non_string_panic_payload_is_reported() {
    let outcome: Outcome<(), Fault> =
        Outcome::success(()).map(|()| std::panic::panic_any(404_u16));

    assert_eq!(outcome.into_error().message(), "non-string panic payload");
}

#[test]
fn from_fault_for_string_keeps_message() {
    let fault = Fault::new("timeout").in_span("fetch");
    assert_eq!(String::from_fault(fault), "timeout");
}

#[test]
fn from_fault_for_boxed_error_keeps_display() {
    let boxed = <Box<dyn Error + Send + Sync>>::from_fault(Fault::new("timeout"));
    assert_eq!(boxed.to_string(), "timeout");
}

#[test]
fn into_message_returns_owned_text() {
    assert_eq!(Fault::new("gone").into_message(), String::from("gone"));
}
