use result_rail::{appl, RailError};
use std::cell::Cell;

#[derive(Debug, PartialEq)]
enum AppError {
    Input(&'static str),
    Rail(RailError),
}

impl From<RailError> for AppError {
    fn from(error: RailError) -> Self {
        AppError::Rail(error)
    }
}

#[test]
fn saturates_three_argument_function() {
    let f3 = |a: i32, b: i32, c: i32| a * 100 + b * 10 + c;

    let r: Result<i32, AppError> = appl(appl(appl(Ok(f3), Ok(1)), Ok(2)), Ok(3));
    assert_eq!(r, Ok(123));
}

#[test]
fn single_argument_function_runs_immediately() {
    let r: Result<usize, AppError> = appl(Ok(|s: &str| s.len()), Ok("rail"));
    assert_eq!(r, Ok(4));
}

#[test]
fn zero_arity_function_is_an_arity_error() {
    let nullary = || "never";

    let r: Result<_, AppError> = appl(Ok(nullary), Ok(5));
    assert_eq!(r.unwrap_err(), AppError::Rail(RailError::ZeroArity));

    let r: Result<_, String> = appl(Ok(nullary), Ok(5));
    assert!(r.unwrap_err().starts_with("arity error"));
}

#[test]
fn function_error_takes_precedence() {
    let r: Result<i32, AppError> = appl(
        Err::<fn(i32) -> i32, _>(AppError::Input("no function")),
        Err(AppError::Input("no value")),
    );
    assert_eq!(r, Err(AppError::Input("no function")));
}

#[test]
fn value_error_propagates_when_function_succeeds() {
    let r: Result<i32, AppError> = appl(Ok(|x: i32| x), Err(AppError::Input("no value")));
    assert_eq!(r, Err(AppError::Input("no value")));
}

#[test]
fn error_short_circuits_before_the_call() {
    let calls = Cell::new(0);
    let f = |a: i32, b: i32, c: i32| {
        calls.set(calls.get() + 1);
        a + b + c
    };

    let r: Result<i32, AppError> =
        appl(appl(appl(Ok(f), Ok(1)), Err(AppError::Input("b missing"))), Ok(3));

    assert_eq!(r, Err(AppError::Input("b missing")));
    assert_eq!(calls.get(), 0);
}

#[test]
fn partial_reports_arity_and_progress() {
    let f4 = |a: u8, b: u8, c: u8, d: u8| [a, b, c, d];

    let step1 = appl::<_, _, _, AppError>(Ok(f4), Ok(1)).unwrap();
    assert_eq!((step1.arity(), step1.applied(), step1.remaining()), (4, 1, 3));

    let step2 = appl::<_, _, _, AppError>(Ok(step1), Ok(2)).unwrap();
    assert_eq!((step2.arity(), step2.applied(), step2.remaining()), (4, 2, 2));
    assert_eq!(step2.supplied(), &(1, 2));

    let step3 = appl::<_, _, _, AppError>(Ok(step2), Ok(3)).unwrap();
    let done = appl::<_, _, _, AppError>(Ok(step3), Ok(4)).unwrap();
    assert_eq!(done, [1, 2, 3, 4]);
}

#[test]
fn arguments_are_passed_in_supply_order() {
    let join = |a: &str, b: &str, c: &str, d: &str, e: &str| format!("{a}{b}{c}{d}{e}");

    let r: Result<String, AppError> = appl(
        appl(appl(appl(appl(Ok(join), Ok("r")), Ok("a")), Ok("i")), Ok("l")),
        Ok("s"),
    );
    assert_eq!(r.unwrap(), "rails");
}

#[test]
fn eight_arguments_are_supported() {
    let sum8 = |a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32, h: u32| {
        a + b + c + d + e + f + g + h
    };

    let step = appl(appl(appl(Ok(sum8), Ok(1)), Ok(2)), Ok(3));
    let step = appl(appl(appl(step, Ok(4)), Ok(5)), Ok(6));
    let r: Result<u32, AppError> = appl(appl(step, Ok(7)), Ok(8));
    assert_eq!(r, Ok(36));
}

#[test]
fn call_result_is_not_flattened() {
    let checked_div = |a: i32, b: i32| if b == 0 { Err("divide by zero") } else { Ok(a / b) };

    let r: Result<Result<i32, &str>, AppError> = appl(appl(Ok(checked_div), Ok(10)), Ok(0));
    assert_eq!(r, Ok(Err("divide by zero")));

    let r: Result<Result<i32, &str>, AppError> = appl(appl(Ok(checked_div), Ok(10)), Ok(2));
    assert_eq!(r, Ok(Ok(5)));
}
