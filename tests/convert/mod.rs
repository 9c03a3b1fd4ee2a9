use outcome_rail::convert::{outcome_to_result, result_to_outcome, IntoOutcome};
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_maps_both_variants() {
    let ok: Result<i32, &str> = Ok(42);
    assert_eq!(result_to_outcome(ok), Outcome::success(42));

    let err: Result<i32, &str> = Err("failed");
    assert_eq!(result_to_outcome(err), Outcome::failure("failed"));
}

#[test]
fn outcome_to_result_maps_both_variants() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(1)), Ok(1));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("e")), Err("e"));
}

#[test]
fn from_impls_round_trip() {
    let o: Outcome<i32, &str> = Ok::<_, &str>(5).into();
    assert_eq!(o, Outcome::success(5));

    let r: Result<i32, &str> = Outcome::<i32, &str>::failure("e").into();
    assert_eq!(r, Err("e"));
}

#[test]
fn into_outcome_continues_a_result_chain() {
    let total = "21"
        .parse::<i32>()
        .into_outcome()
        .map(|n| n * 2)
        .unwrap_or(0);
    assert_eq!(total, 42);

    let fallback = "not a number"
        .parse::<i32>()
        .into_outcome()
        .map(|n| n * 2)
        .unwrap_or(0);
    assert_eq!(fallback, 0);
}
