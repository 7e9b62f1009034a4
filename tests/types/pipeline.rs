use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use outcome_rail::{Fault, Outcome, Pipeline};

fn validate_positive(n: i32) -> Outcome<i32, String> {
    if n > 0 {
        Outcome::success(n)
    } else {
        Outcome::failure("Number must be positive".to_string())
    }
}

fn counting_step(counter: &Arc<AtomicUsize>) -> impl Fn(i32) -> Outcome<i32, String> + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move |n| {
        counter.fetch_add(1, Ordering::SeqCst);
        Outcome::success(n)
    }
}

#[test]
fn empty_pipeline_returns_initial_value() {
    let pipeline: Pipeline<i32, String> = Pipeline::new();

    assert!(pipeline.is_empty());
    assert_eq!(pipeline.len(), 0);
    assert_eq!(pipeline.execute(42), Outcome::success(42));
}

#[test]
fn steps_run_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let third = Arc::clone(&order);

    let pipeline = Pipeline::<String, String>::new()
        .add_step(move |s: String| {
            first.lock().unwrap().push("first");
            Outcome::success(s + "a")
        })
        .add_step(move |s: String| {
            second.lock().unwrap().push("second");
            Outcome::success(s + "b")
        })
        .add_step(move |s: String| {
            third.lock().unwrap().push("third");
            Outcome::success(s + "c")
        });

    assert_eq!(pipeline.execute(String::new()).into_value(), "abc");
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn failure_short_circuits_remaining_steps() {
    let after = Arc::new(AtomicUsize::new(0));

    let pipeline = Pipeline::new()
        .add_step(validate_positive)
        .add_step(counting_step(&after))
        .add_step(counting_step(&after));

    let outcome = pipeline.execute(-1);

    assert_eq!(outcome, Outcome::failure("Number must be positive".to_string()));
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn failure_in_middle_stops_only_later_steps() {
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let pipeline = Pipeline::new()
        .add_step(counting_step(&before))
        .add_step(|n: i32| -> Outcome<i32, String> { Outcome::failure(format!("rejected {n}")) })
        .add_step(counting_step(&after));

    assert_eq!(pipeline.execute(3).into_error(), "rejected 3");
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn same_step_registered_twice_runs_twice() {
    let calls = Arc::new(AtomicUsize::new(0));
    let step = counting_step(&calls);
    let shared = Arc::new(step);
    let again = Arc::clone(&shared);

    let pipeline = Pipeline::new()
        .add_step(move |n: i32| (*shared)(n))
        .add_step(move |n: i32| (*again)(n));

    assert_eq!(pipeline.len(), 2);
    assert!(pipeline.execute(1).is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn pipeline_can_be_executed_repeatedly() {
    let pipeline = Pipeline::new()
        .add_step(validate_positive)
        .add_step(|n: i32| Outcome::success(n * 2));

    assert_eq!(pipeline.execute(5), Outcome::success(10));
    assert_eq!(pipeline.execute(-1), Outcome::failure("Number must be positive".to_string()));
    assert_eq!(pipeline.execute(7), Outcome::success(14));
    assert_eq!(pipeline.len(), 2);
}

#[test]
fn panicking_step_becomes_failure() {
    let after = Arc::new(AtomicUsize::new(0));
    let after_step = Arc::clone(&after);

    let pipeline = Pipeline::<i32, Fault>::new()
        .add_step(|n: i32| -> Outcome<i32, Fault> {
            let divisor = n - n;
            Outcome::success(n / divisor)
        })
        .add_step(move |n: i32| {
            after_step.fetch_add(1, Ordering::SeqCst);
            Outcome::success(n)
        });

    let fault = pipeline.execute(4).into_error();

    assert!(fault.message().contains("divide by zero"));
    assert!(fault.location().is_some());
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn fault_handler_overrides_from_fault() {
    #[derive(Debug, PartialEq)]
    enum JobError {
        Rejected,
        Crashed(String),
    }

    let pipeline = Pipeline::with_fault_handler(|fault: Fault| JobError::Crashed(fault.into_message()))
        .add_step(|n: u8| if n == 0 { Outcome::failure(JobError::Rejected) } else { Outcome::success(n) })
        .add_step(|_: u8| -> Outcome<u8, JobError> { panic!("worker died") });

    assert_eq!(pipeline.execute(0), Outcome::failure(JobError::Rejected));
    assert_eq!(pipeline.execute(1), Outcome::failure(JobError::Crashed("worker died".into())));
}

#[test]
fn pipeline_fault_location_is_execute_call_site() {
    let pipeline = Pipeline::<(), Fault>::new().add_step(|()| -> Outcome<(), Fault> { panic!("x") });

    let fault = pipeline.execute(()).into_error();
    let location = fault.location().unwrap();

    assert!(location.contains("pipeline.rs"), "unexpected location {location}");
    assert!(!location.contains("src/types"), "location should be the caller, got {location}");
}

#[test]
fn pipelines_run_independently_across_threads() {
    let pipeline = Arc::new(
        Pipeline::<u64, String>::new()
            .add_step(|n: u64| Outcome::success(n + 1))
            .add_step(|n: u64| Outcome::success(n * 3)),
    );

    let handles: Vec<_> = (0..4_u64)
        .map(|i| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || pipeline.execute(i).into_value())
        })
        .collect();

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![3, 6, 9, 12]);
}

#[test]
fn debug_shows_name_and_step_count() {
    let pipeline = Pipeline::<i32, String>::new()
        .with_name("checkout")
        .add_step(validate_positive);

    assert_eq!(pipeline.name(), Some("checkout"));
    let rendered = format!("{pipeline:?}");
    assert!(rendered.contains("checkout"));
    assert!(rendered.contains("steps: 1"));
}

#[test]
fn default_is_empty_pipeline() {
    let pipeline: Pipeline<i32, Fault> = Pipeline::default();
    assert!(pipeline.is_empty());
    assert_eq!(pipeline.name(), None);
}
