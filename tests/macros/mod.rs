use result_rail::{appl, RailError};
use std::cell::Cell;

#[test]
fn without_values_returns_function_result() {
    let f: Result<fn(i32) -> i32, &str> = Ok(|x| x + 1);
    let same = appl!(f);
    assert_eq!(same.map(|f| f(1)), Ok(2));

    let failed: Result<fn(i32) -> i32, &str> = Err("no function");
    assert!(appl!(failed).is_err());
}

#[test]
fn saturates_in_order() {
    let label = |kind: &str, id: u32, active: bool| format!("{kind}-{id}-{active}");
    let r: Result<String, RailError> = appl!(Ok(label), Ok("user"), Ok(7), Ok(true));
    assert_eq!(r.unwrap(), "user-7-true");
}

#[test]
fn accepts_trailing_comma() {
    let add = |a: i32, b: i32| a + b;
    let r: Result<i32, RailError> = appl!(Ok(add), Ok(1), Ok(2),);
    assert_eq!(r, Ok(3));
}

#[test]
fn error_in_the_middle_wins_and_function_never_runs() {
    let calls = Cell::new(0);
    let add3 = |a: i32, b: i32, c: i32| {
        calls.set(calls.get() + 1);
        a + b + c
    };

    let r: Result<i32, String> =
        appl!(Ok(add3), Ok(1), Err("second".to_string()), Err("third".to_string()));
    assert_eq!(r, Err("second".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn partial_chain_can_be_finished_later() {
    let add3 = |a: i32, b: i32, c: i32| a + b + c;
    let partial = appl!(Ok::<_, RailError>(add3), Ok(1), Ok(2));
    let done: Result<i32, RailError> = appl!(partial, Ok(3));
    assert_eq!(done, Ok(6));
}

#[cfg(feature = "tracing")]
mod tracing_events;
