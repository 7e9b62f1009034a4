use outcome_rail::{Fault, FromFault, Outcome, Pipeline};

#[derive(Debug, Clone, PartialEq)]
enum ImportError {
    MalformedRow(usize),
    Internal { message: String, location: Option<String> },
}

impl FromFault for ImportError {
    fn from_fault(fault: Fault) -> Self {
        ImportError::Internal {
            location: fault.location().map(str::to_owned),
            message: fault.into_message(),
        }
    }
}

fn parse_row(row: usize) -> Outcome<usize, ImportError> {
    if row % 10 == 0 {
        Outcome::failure(ImportError::MalformedRow(row))
    } else {
        Outcome::success(row)
    }
}

#[test]
fn domain_errors_and_faults_share_one_error_type() {
    let rejected = Outcome::success(20).flat_map(parse_row);
    let crashed = Outcome::success(21)
        .flat_map(parse_row)
        .map(|_| -> usize { panic!("index corrupted") });

    assert_eq!(rejected.into_error(), ImportError::MalformedRow(20));
    match crashed.into_error() {
        ImportError::Internal { message, location } => {
            assert_eq!(message, "index corrupted");
            assert!(location.is_some());
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[test]
fn pipeline_new_uses_from_fault() {
    let pipeline = Pipeline::<usize, ImportError>::new()
        .add_step(parse_row)
        .add_step(|_: usize| -> Outcome<usize, ImportError> { panic!("row buffer gone") });

    assert!(matches!(
        pipeline.execute(3).into_error(),
        ImportError::Internal { ref message, .. } if message == "row buffer gone"
    ));
}

#[test]
fn fault_from_fault_is_identity() {
    let fault = Fault::new("same");
    assert_eq!(Fault::from_fault(fault.clone()), fault);
}
