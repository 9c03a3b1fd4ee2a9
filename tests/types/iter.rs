use outcome_rail::Outcome;

#[test]
fn iter_yields_one_item_for_success() {
    let o: Outcome<i32, &str> = Outcome::success(42);
    let collected: Vec<&i32> = o.iter().collect();
    assert_eq!(collected, vec![&42]);
}

#[test]
fn iter_is_empty_for_failure() {
    let o: Outcome<i32, &str> = Outcome::failure("e");
    assert_eq!(o.iter().count(), 0);
}

#[test]
fn iter_mut_allows_in_place_updates() {
    let mut o: Outcome<i32, &str> = Outcome::success(1);
    for v in o.iter_mut() {
        *v += 10;
    }
    assert_eq!(o, Outcome::success(11));
}

#[test]
fn into_iter_moves_the_payload() {
    let o: Outcome<String, &str> = Outcome::success("owned".to_string());
    let collected: Vec<String> = o.into_iter().collect();
    assert_eq!(collected, vec!["owned".to_string()]);
}

#[test]
fn iter_failure_yields_the_error_only() {
    let o: Outcome<i32, &str> = Outcome::failure("bad");
    let errors: Vec<&&str> = o.iter_failure().collect();
    assert_eq!(errors, vec![&"bad"]);

    let o: Outcome<i32, &str> = Outcome::success(1);
    assert_eq!(o.iter_failure().count(), 0);
}

#[test]
fn by_ref_into_iterator_works_in_for_loops() {
    let o: Outcome<i32, &str> = Outcome::success(3);
    let mut seen = 0;
    for v in &o {
        seen += *v;
    }
    assert_eq!(seen, 3);
}
