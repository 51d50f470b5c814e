use result_rail::curried;

#[test]
fn curried_map_is_reusable() {
    let shout = curried::map(|s: &str| s.to_uppercase());

    assert_eq!(shout(Ok::<_, &str>("a")), Ok("A".to_string()));
    assert_eq!(shout(Ok("b")), Ok("B".to_string()));
    assert_eq!(shout(Err("quiet")), Err("quiet"));
}

#[test]
fn curried_bind_threads_through_iterator() {
    let non_zero = curried::bind(|x: i32| if x == 0 { Err("zero") } else { Ok(10 / x) });

    let outputs: Vec<Result<i32, &str>> = vec![Ok(2), Ok(0), Err("missing")]
        .into_iter()
        .map(non_zero)
        .collect();

    assert_eq!(outputs, vec![Ok(5), Err("zero"), Err("missing")]);
}

#[test]
fn curried_forms_compose() {
    let inc = curried::map(|x: i32| x + 1);
    let even = curried::bind(|x: i32| if x % 2 == 0 { Ok(x) } else { Err("odd") });

    assert_eq!(even(inc(Ok(1))), Ok(2));
    assert_eq!(even(inc(Ok(2))), Err("odd"));
}
