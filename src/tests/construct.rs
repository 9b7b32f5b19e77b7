use super::{Empty, Tracked, new_log};
use crate::{Element, FromArgs, Pair, PiecewiseError, pair};
use std::panic::{self, AssertUnwindSafe};

/// Neither `Default` nor `Clone`.
#[derive(Element, Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

impl FromArgs<(&str, u16)> for Endpoint {
    fn from_args((host, port): (&str, u16)) -> Self {
        Endpoint {
            host: host.to_owned(),
            port,
        }
    }
}

#[test]
fn default_construction() {
    let pair: Pair<u32, String> = Pair::default();
    assert_eq!(pair.as_tuple(), (&0, &String::new()));

    let pair: Pair<Empty, Vec<u8>> = Default::default();
    assert!(pair.second().is_empty());
}

#[test]
fn converting_construction() {
    let pair: Pair<String, i64> = Pair::convert("id", 7i32);
    assert_eq!(pair.first(), "id");
    assert_eq!(*pair.second(), 7);
}

#[test]
fn single_element_construction() {
    let pair: Pair<u8, String> = Pair::with_first(3);
    assert_eq!(pair, Pair::new(3, String::new()));

    let pair: Pair<Empty, u8> = Pair::with_second(4);
    assert_eq!(*pair.second(), 4);

    let pair = Pair::<String, String>::splat(String::from("same"));
    assert_eq!(pair.first(), pair.second());
}

#[test]
fn piecewise_construction() {
    let pair: Pair<Endpoint, Vec<u8>> = Pair::piecewise(("localhost", 80u16), ());
    assert_eq!(pair.first().host, "localhost");
    assert_eq!(pair.first().port, 80);
    assert!(pair.second().is_empty());

    let pair: Pair<Empty, u32> = pair!(@piecewise (), (9u32));
    assert_eq!(*pair.second(), 9);

    let pair = Pair::piecewise_with(|| Endpoint::from_args(("a", 1)), || Empty);
    assert_eq!(pair.first().port, 1);
}

#[test]
fn piecewise_single_argument_converts() {
    let pair = Pair::<String, u64>::piecewise(("abc",), (1u32,));
    assert_eq!(pair.first(), "abc");
    assert_eq!(*pair.second(), 1);

    let pair: Pair<Vec<u8>, Empty> = pair!(@piecewise ([1u8, 2].as_slice()), ());
    assert_eq!(pair.first(), &[1, 2]);
}

#[test]
fn fallible_piecewise() {
    let ok: Result<Pair<u8, u16>, PiecewiseError<&str, &str>> =
        Pair::try_piecewise_with(|| Ok(1), || Ok(2));
    assert_eq!(ok.map(Pair::into_tuple), Ok((1, 2)));

    let mut second_called = false;
    let err = Pair::<u8, u16>::try_piecewise_with(
        || Err::<u8, _>("bad first"),
        || {
            second_called = true;
            Ok::<u16, &str>(2)
        },
    );
    assert_eq!(err.map(|_| ()), Err(PiecewiseError::First("bad first")));
    assert!(!second_called);
}

#[test]
fn failed_second_drops_first_once() {
    let log = new_log();
    let err = Pair::<Tracked, u32>::try_piecewise_with(
        || Ok::<_, ()>(Tracked::new("first", &log)),
        || Err::<u32, _>("no second"),
    );

    assert!(matches!(err, Err(PiecewiseError::Second("no second"))));
    assert_eq!(*log.borrow(), ["first"]);
}

#[test]
fn panicking_second_drops_first_once() {
    let log = new_log();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        Pair::<Tracked, Tracked>::piecewise_with(
            || Tracked::new("first", &log),
            || panic!("second failed"),
        )
    }));

    assert!(result.is_err());
    assert_eq!(*log.borrow(), ["first"]);
}

#[test]
fn error_display() {
    let err: PiecewiseError<&str, u8> = PiecewiseError::First("oops");
    assert_eq!(err.to_string(), "failed to construct first element: oops");

    let err: PiecewiseError<&str, &str> = PiecewiseError::Second("late");
    assert_eq!(err.to_string(), "failed to construct second element: late");
    assert_eq!(err.into_inner(), "late");
}
