use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use outcome_rail::{pipeline, rail, Fault, Outcome};

#[test]
fn rail_wraps_result() {
    let parsed: Outcome<i32, String> = rail!("12".parse::<i32>().map_err(|e| e.to_string()));
    assert_eq!(parsed, Outcome::success(12));
}

#[test]
fn rail_passes_outcome_through() {
    let outcome: Outcome<i32, Fault> = rail!(Outcome::failure(Fault::new("kept")));
    assert_eq!(outcome.into_error().message(), "kept");
}

#[test]
fn rail_captures_panic() {
    let empty: Vec<u8> = Vec::new();
    let outcome: Outcome<u8, Fault> = rail!(Ok::<u8, Fault>(empty[0]));

    assert!(outcome.error().message().contains("index out of bounds"));
}

#[test]
fn rail_with_handler() {
    let outcome: Outcome<u8, &'static str> =
        rail!(Ok::<u8, &str>(u8::try_from(300_u32).unwrap()), on_fault = |_| "overflow");

    assert_eq!(outcome, Outcome::failure("overflow"));
}

#[test]
fn pipeline_macro_preserves_order() {
    let checked = pipeline![
        |s: String| Outcome::<String, String>::success(s + "1"),
        |s: String| Outcome::success(s + "2"),
        |s: String| Outcome::success(s + "3"),
    ];

    assert_eq!(checked.len(), 3);
    assert_eq!(checked.execute(String::from(">")).into_value(), ">123");
}

#[test]
fn pipeline_macro_short_circuits() {
    let later = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&later);

    let checked = pipeline![
        |_: i32| Outcome::<i32, Fault>::failure(Fault::new("stop")),
        move |n: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::success(n)
        },
    ];

    assert!(checked.execute(1).is_failure());
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_pipeline_macro() {
    let empty: outcome_rail::Pipeline<i32, Fault> = pipeline![];
    assert_eq!(empty.execute(3), Outcome::success(3));
}
