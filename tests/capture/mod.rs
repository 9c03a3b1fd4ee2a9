use outcome_rail::capture::{panic_message, try_catch};
use outcome_rail::Outcome;

#[test]
fn try_catch_wraps_a_normal_return() {
    let o = try_catch(|| 5);
    assert_eq!(o.into_success(), Some(5));
}

#[test]
fn try_catch_captures_a_str_panic() {
    let o = try_catch(|| -> i32 { panic!("boom") });
    assert!(o.is_failure());
    let caught = o.into_failure().unwrap();
    assert_eq!(panic_message(&caught), "boom");
}

#[test]
fn try_catch_captures_a_formatted_panic() {
    let o = try_catch(|| -> i32 { panic!("bad id {}", 7) });
    let caught = o.into_failure().unwrap();
    assert_eq!(panic_message(&caught), "bad id 7");
}

#[test]
fn try_catch_captures_typed_payloads_intact() {
    let o = try_catch(|| -> i32 { std::panic::panic_any(42_u8) });
    let caught = o.into_failure().unwrap();
    // Non-string payloads render as a placeholder but stay downcastable.
    assert_eq!(panic_message(&caught), "Box<dyn Any>");
    assert_eq!(caught.downcast_ref::<u8>(), Some(&42));
}

#[test]
fn captured_panics_flow_through_combinators_as_data() {
    let o = try_catch(|| -> i32 { panic!("boom") });
    let narrowed: Outcome<i32, String> = o.map_err(|caught| panic_message(&caught).to_string());
    assert_eq!(narrowed.clone().unwrap_or(0), 0);
    assert_eq!(narrowed.into_failure().unwrap(), "boom");
}
