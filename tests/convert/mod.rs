use outcome_rail::convert::{flatten, outcome_to_result, result_to_outcome};
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_preserves_track() {
    assert_eq!(result_to_outcome::<i32, &str>(Ok(1)), Outcome::success(1));
    assert_eq!(result_to_outcome::<i32, &str>(Err("e")), Outcome::failure("e"));
}

#[test]
fn outcome_to_result_preserves_track() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(1)), Ok(1));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("e")), Err("e"));
}

#[test]
fn question_mark_works_after_conversion() {
    fn load(raw: &str) -> Result<u8, String> {
        let value = outcome_to_result(
            Outcome::<&str, String>::success(raw)
                .flat_map(|s| result_to_outcome(s.parse::<u8>().map_err(|e| e.to_string()))),
        )?;
        Ok(value + 1)
    }

    assert_eq!(load("4"), Ok(5));
    assert!(load("x").is_err());
}

#[test]
fn flatten_returns_inner_outcome() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    assert_eq!(flatten(nested), Outcome::failure("inner"));
}
