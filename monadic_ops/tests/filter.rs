mod common;

use common::{Calls, TrackClones};
use monadic_ops::{cloned, filter, resolve};
use std::ptr;

#[test]
fn keeps_or_drops_value() {
    assert_eq!(resolve!(Some(25), filter(|x: &i32| *x > 5)), Some(25));
    assert_eq!(resolve!(Some(25), filter(|x: &i32| *x < 5)), None);
    assert_eq!(resolve!(None, filter(|x: &i32| *x > 5)), None);
}

#[test]
fn empty_input_never_calls_predicate() {
    let calls = Calls::default();
    let result = resolve!(
        None::<i32>,
        filter(|_: &i32| {
            calls.hit();
            true
        })
    );
    assert_eq!(result, None);
    assert_eq!(calls.count(), 0);
}

#[test]
fn present_input_calls_predicate_once() {
    let calls = Calls::default();
    let result = resolve!(
        Some(1),
        filter(|_: &i32| {
            calls.hit();
            false
        })
    );
    assert_eq!(result, None);
    assert_eq!(calls.count(), 1);
}

#[test]
fn strings() {
    assert_eq!(
        resolve!(
            Some(String::from("hello")),
            filter(|s: &String| s.len() > 10)
        ),
        None
    );
    assert_eq!(
        resolve!(
            Some(String::from("world")),
            filter(|s: &String| s.len() == 5)
        )
        .as_deref(),
        Some("world")
    );
}

#[test]
fn substrings() {
    assert_eq!(
        resolve!(
            Some(String::from("test")),
            filter(|s: &String| s.contains("es"))
        )
        .as_deref(),
        Some("test")
    );
    assert_eq!(
        resolve!(
            Some(String::from("filter")),
            filter(|s: &String| s.contains("abc"))
        ),
        None
    );
}

#[test]
fn non_clonable_values_are_moved() {
    struct Unique(Box<i32>);

    let result = resolve!(
        Some(Unique(Box::new(10))),
        filter(|unique: &Unique| *unique.0 > 5)
    );
    assert_eq!(result.as_ref().map(|unique| *unique.0), Some(10));

    let result = resolve!(result, filter(|unique: &Unique| *unique.0 < 5));
    assert!(result.is_none());
}

#[derive(Debug, PartialEq)]
struct Pair {
    a: i32,
    b: i32,
}

#[test]
fn borrowed_input_keeps_a_borrow() {
    let stored = Some(Pair { a: 10, b: 20 });

    let kept = resolve!(&stored, filter(|pair: &&Pair| pair.a + pair.b > 25));
    assert!(ptr::eq(kept.unwrap(), stored.as_ref().unwrap()));
    assert_eq!(kept, Some(&Pair { a: 10, b: 20 }));

    let dropped = resolve!(&stored, filter(|pair: &&Pair| pair.a + pair.b < 15));
    assert_eq!(dropped, None);
    assert!(stored.is_some());
}

#[test]
fn mutably_borrowed_input_keeps_a_mutable_borrow() {
    let mut stored = Some(Pair { a: 1, b: 2 });
    if let Some(pair) = resolve!(&mut stored, filter(|pair: &&mut Pair| pair.a < pair.b)) {
        pair.a = 3;
    }
    assert_eq!(stored, Some(Pair { a: 3, b: 2 }));
}

#[test]
fn nested_optionals() {
    let nested = Some(Some(42));

    let kept = resolve!(
        &nested,
        filter(|inner: &&Option<i32>| inner.is_some_and(|x| x > 40))
    );
    assert_eq!(kept, Some(&Some(42)));

    let dropped = resolve!(
        &nested,
        filter(|inner: &&Option<i32>| inner.is_some_and(|x| x < 10))
    );
    assert_eq!(dropped, None);
}

#[test]
fn multiple_conditions() {
    let value = Some(50);
    assert_eq!(
        resolve!(value, filter(|x: &i32| *x > 5 && *x < 100)),
        Some(50)
    );
    assert_eq!(
        resolve!(value, filter(|x: &i32| *x < 5 || *x > 100)),
        None
    );
}

#[test]
fn owned_input_is_moved_not_cloned() {
    TrackClones::reset_counts();
    let kept = resolve!(
        Some(TrackClones::new(25)),
        filter(|tracked: &TrackClones| tracked.value > 5)
    );
    assert_eq!(kept, Some(TrackClones::new(25)));
    assert_eq!(TrackClones::clone_count(), 0);

    let dropped = resolve!(
        Some(TrackClones::new(25)),
        filter(|tracked: &TrackClones| tracked.value < 5)
    );
    assert_eq!(dropped, None);
    assert_eq!(TrackClones::clone_count(), 0);
}

#[test]
fn borrowed_input_is_cloned_once_when_kept() {
    TrackClones::reset_counts();
    let tracked = Some(TrackClones::new(25));

    let kept = resolve!(
        &tracked,
        filter(|tracked: &&TrackClones| tracked.value > 5),
        cloned()
    );
    assert_eq!(kept, Some(TrackClones::new(25)));
    assert_eq!(TrackClones::clone_count(), 1);
}

#[test]
fn borrowed_input_is_not_cloned_when_dropped() {
    TrackClones::reset_counts();
    let tracked = Some(TrackClones::new(25));

    let dropped = resolve!(
        &tracked,
        filter(|tracked: &&TrackClones| tracked.value < 5),
        cloned()
    );
    assert_eq!(dropped, None);
    assert_eq!(TrackClones::clone_count(), 0);
}
