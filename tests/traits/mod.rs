use result_rail::traits::RailExt;
use result_rail::RailError;


#[test]
fn appl_method_chains_left_to_right() {
    let area = |w: u32, h: u32| w * h;

    let r: Result<u32, RailError> = Ok(area).appl(Ok(6)).appl(Ok(7));
    assert_eq!(r, Ok(42));
}

#[test]
fn appl_method_propagates_errors() {
    let area = |w: u32, h: u32| w * h;

    let r: Result<u32, String> = Ok(area).appl(Err("no width".to_string())).appl(Ok(7));
    assert_eq!(r, Err("no width".to_string()));

    let r: Result<u32, String> = Err::<fn(u32, u32) -> u32, _>("no function".to_string())
        .appl(Ok(1))
        .appl(Ok(2));
    assert_eq!(r, Err("no function".to_string()));
}

#[test]
fn tap_observes_success_only() {
    let mut seen = Vec::new();

    let ok: Result<i32, &str> = Ok(1).tap(|v| seen.push(*v));
    let err: Result<i32, &str> = Err("e").tap(|v| seen.push(*v));

    assert_eq!((ok, err), (Ok(1), Err("e")));
    assert_eq!(seen, vec![1]);
}

#[test]
fn tap_err_observes_error_only() {
    let mut seen = Vec::new();

    let _ = Ok::<i32, &str>(1).tap_err(|e| seen.push(*e));
    let _ = Err::<i32, &str>("logged").tap_err(|e| seen.push(*e));

    assert_eq!(seen, vec!["logged"]);
}
