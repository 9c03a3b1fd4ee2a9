use outcome_rail::ops;
use outcome_rail::{ErrorVec, Outcome};

#[test]
fn free_functions_match_instance_operations() {
    let s = || Outcome::<i32, &str>::success(21);
    let f = || Outcome::<i32, &str>::failure("e");

    assert_eq!(ops::map(s(), |n| n * 2), s().map(|n| n * 2));
    assert_eq!(ops::map(f(), |n| n * 2), f().map(|n| n * 2));
    assert_eq!(
        ops::map_err(f(), |e| e.len()),
        f().map_err(|e| e.len())
    );
    assert_eq!(
        ops::and_then(s(), |n| Outcome::<i32, &str>::success(n + 1)),
        s().and_then(|n| Outcome::success(n + 1))
    );
    assert_eq!(ops::unwrap_or(f(), 0), 0);
    assert_eq!(ops::unwrap(s()), 21);
    assert_eq!(ops::expect(s(), "payload"), 21);
    assert!(ops::is_success(&s()));
    assert!(ops::is_failure(&f()));
}

#[test]
#[should_panic(expected = "called unwrap on a failure value")]
fn free_unwrap_panics_on_failure() {
    let _ = ops::unwrap(Outcome::<i32, &str>::failure("e"));
}

#[test]
fn combine_all_of_empty_input_is_an_empty_success() {
    let outcomes: Vec<Outcome<i32, &str>> = vec![];
    assert_eq!(ops::combine_all(outcomes), Outcome::success(vec![]));
}

#[test]
fn combine_all_preserves_payload_order() {
    let outcomes = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::success(2),
        Outcome::success(3),
    ];
    assert_eq!(ops::combine_all(outcomes), Outcome::success(vec![1, 2, 3]));
}

#[test]
fn combine_all_returns_first_failure_unmodified() {
    let outcomes = vec![
        Outcome::success(1),
        Outcome::failure("e1"),
        Outcome::success(3),
        Outcome::failure("e2"),
    ];
    assert_eq!(ops::combine_all(outcomes), Outcome::failure("e1"));
}

#[test]
fn combine_all_short_circuits_on_a_lazy_source() {
    let outcomes = [
        Outcome::success(1),
        Outcome::failure("e1"),
        Outcome::success(3),
        Outcome::failure("e2"),
    ];
    let mut pulled = 0;
    let result = ops::combine_all(outcomes.into_iter().inspect(|_| pulled += 1));
    assert_eq!(result, Outcome::failure("e1"));
    // Only the elements up to and including the first failure were consumed.
    assert_eq!(pulled, 2);
}

#[test]
fn collect_via_from_iterator_matches_combine_all() {
    let collected: Outcome<Vec<i32>, &str> = (1..=3)
        .map(Outcome::<i32, &str>::success)
        .collect();
    assert_eq!(collected, Outcome::success(vec![1, 2, 3]));

    let collected: Outcome<Vec<i32>, &str> =
        vec![Outcome::success(1), Outcome::failure("e")].into_iter().collect();
    assert_eq!(collected, Outcome::failure("e"));
}

#[test]
fn collect_errors_keeps_relative_order_and_skips_successes() {
    let outcomes = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("a"),
        Outcome::success(2),
        Outcome::failure("b"),
    ];
    let errors = ops::collect_errors(outcomes);
    assert_eq!(errors.as_slice(), ["a", "b"]);
}

#[test]
fn collect_errors_of_all_successes_is_empty() {
    let outcomes = vec![Outcome::<i32, &str>::success(1), Outcome::success(2)];
    let errors: ErrorVec<&str> = ops::collect_errors(outcomes);
    assert!(errors.is_empty());
}

#[test]
fn partition_splits_in_order() {
    let outcomes = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("a"),
        Outcome::success(3),
        Outcome::failure("b"),
    ];
    let (successes, failures) = ops::partition(outcomes);
    assert_eq!(successes, vec![1, 3]);
    assert_eq!(failures.as_slice(), ["a", "b"]);
}

#[test]
fn partition_of_empty_input_is_two_empty_sequences() {
    let outcomes: Vec<Outcome<i32, &str>> = vec![];
    let (successes, failures) = ops::partition(outcomes);
    assert!(successes.is_empty());
    assert!(failures.is_empty());
}

#[test]
fn partition_conserves_length() {
    let outcomes: Vec<Outcome<i32, i32>> = (0..100)
        .map(|n| {
            if n % 3 == 0 {
                Outcome::failure(n)
            } else {
                Outcome::success(n)
            }
        })
        .collect();
    let total = outcomes.len();
    let (successes, failures) = ops::partition(outcomes);
    assert_eq!(successes.len() + failures.len(), total);
}
