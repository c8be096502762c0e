//! Tests for the runtime currying engine.

#![cfg(feature = "compose")]

use pointfree::Error;
use pointfree::compose::{Callable, Curried, Step, arity, curry, opaque, with_arity};
use rstest::rstest;

fn partial<F, A, M>(step: Result<Step<F, A, M>, Error>) -> Curried<F, A, M>
where
    F: Callable<A, M>,
{
    match step {
        Ok(Step::Partial(curried)) => curried,
        Ok(Step::Complete(_)) => panic!("expected a partial application, got a value"),
        Err(error) => panic!("expected a partial application, got {error}"),
    }
}

fn add_three(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn test_remaining_counts_down(#[case] applied: usize) {
    let mut curried = curry(add_three).unwrap();
    for value in 1..applied {
        curried = partial(curried.apply(i32::try_from(value).unwrap()));
    }
    assert_eq!(curried.applied(), applied - 1);
    assert_eq!(curried.remaining(), 3 - (applied - 1));
}

#[rstest]
fn test_apply_leaves_receiver_unchanged() {
    let curried = curry(add_three).unwrap();
    let with_nine = partial(curried.apply(9));

    let _ = with_nine.apply(1);
    let _ = with_nine.apply(2);

    assert_eq!(with_nine.applied(), 1);
    assert_eq!(
        partial(with_nine.apply(8)).apply(7).unwrap().into_complete(),
        Some(24)
    );
}

#[rstest]
fn test_sibling_branches_do_not_observe_each_other() {
    let join = curry(|a: String, b: String, c: String| format!("{a}{b}{c}")).unwrap();
    let root = partial(join.apply("r".to_string()));
    let left = partial(root.apply("L".to_string()));
    let right = partial(root.apply("R".to_string()));

    assert_eq!(left.apply("1".to_string()).unwrap().into_complete(), Some("rL1".to_string()));
    assert_eq!(right.apply("2".to_string()).unwrap().into_complete(), Some("rR2".to_string()));
    assert_eq!(left.apply("3".to_string()).unwrap().into_complete(), Some("rL3".to_string()));
}

#[rstest]
fn test_clone_shares_applied_arguments() {
    let curried = partial(curry(add_three).unwrap().apply(100));
    let copy = curried.clone();

    assert_eq!(copy.applied(), 1);
    assert_eq!(
        partial(copy.apply(10)).apply(1).unwrap().into_complete(),
        Some(111)
    );
}

#[rstest]
fn test_declared_arity_receives_arguments_in_order() {
    let collect = with_arity(4, |values: Vec<char>| values.into_iter().collect::<String>());
    let curried = curry(collect).unwrap();
    assert_eq!(curried.arity(), 4);

    let step = partial(partial(partial(curried.apply('a')).apply('b')).apply('c')).apply('d');
    assert_eq!(step.unwrap().into_complete(), Some("abcd".to_string()));
}

#[rstest]
fn test_arity_of_plain_functions() {
    assert_eq!(arity::<i32, _, _>(&add_three), Ok(3));
    assert_eq!(arity(&|value: u8| value), Ok(1));
    assert_eq!(arity::<u8, _, _>(&|| 0), Ok(0));
}

#[rstest]
fn test_opaque_callable_reports_uninspectable() {
    let counted = opaque(|values: Vec<i32>| values.len());

    let error = curry(counted.clone()).err().unwrap();
    assert!(matches!(error, Error::UninspectableCallable { .. }));
    assert!(error.to_string().contains("with_arity"));

    assert_eq!(counted.invoke(vec![1, 2, 3]), Ok(3));
}

#[rstest]
fn test_zero_arity_error_message() {
    let error = curry::<i32, _, _>(|| 7).err().unwrap();
    assert_eq!(error, Error::InvalidArity { arity: 0 });
    assert_eq!(
        error.to_string(),
        "curry expected a function with at least 1 argument, got arity 0"
    );
}

#[rstest]
fn test_step_predicates() {
    let curried = curry(|a: i32, b: i32| a * b).unwrap();
    let first = curried.apply(6).unwrap();
    assert!(!first.is_complete());

    let second = first.into_partial().unwrap().apply(7).unwrap();
    assert!(second.is_complete());
    assert_eq!(second.into_complete(), Some(42));
}

#[cfg(feature = "arc")]
#[rstest]
fn test_partial_application_is_shared_across_threads() {
    let with_one = partial(curry(add_three).unwrap().apply(1));

    let totals: Vec<Option<i32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|second| {
                let with_one = &with_one;
                scope.spawn(move || {
                    partial(with_one.apply(second))
                        .apply(10)
                        .ok()
                        .and_then(Step::into_complete)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(totals, vec![Some(11), Some(12), Some(13), Some(14)]);
    assert_eq!(with_one.applied(), 1);
}
