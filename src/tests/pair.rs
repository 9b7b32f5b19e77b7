use super::{Empty, Other};
use crate::{Element, Pair, swap};
use std::{
    cmp::{Ordering, Reverse},
    collections::{HashMap, hash_map::DefaultHasher},
    hash::{Hash, Hasher},
};

#[derive(Element, Debug, Clone, PartialEq)]
struct Unordered(u8);

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn access_is_layout_independent() {
    let both = Pair::new(3u32, String::from("three"));
    assert_eq!(*both.first(), 3);
    assert_eq!(both.second(), "three");

    let first_zero = Pair::new(Empty, 4i64);
    assert_eq!(*first_zero.first(), Empty);
    assert_eq!(*first_zero.second(), 4);

    let second_zero = Pair::new(5i64, Other {});
    assert_eq!(*second_zero.first(), 5);
    assert_eq!(*second_zero.second(), Other {});

    let zero = Pair::new(Empty, Other {});
    assert_eq!(zero.as_tuple(), (&Empty, &Other {}));
}

#[test]
fn mutation() {
    let mut pair = Pair::new(Empty, vec![1, 2]);
    pair.second_mut().push(3);
    assert_eq!(pair.second(), &[1, 2, 3]);

    let mut pair = Pair::new(1u8, String::new());
    {
        let (first, second) = pair.split_mut();
        *first += 1;
        second.push_str("two");
    }
    assert_eq!(pair.into_tuple(), (2, String::from("two")));
}

#[test]
fn swap_exchanges_and_restores() {
    let mut p = Pair::new(1u32, String::from("p"));
    let mut q = Pair::new(2u32, String::from("q"));

    p.swap(&mut q);
    assert_eq!((*p.first(), p.second().as_str()), (2, "q"));
    assert_eq!((*q.first(), q.second().as_str()), (1, "p"));

    swap(&mut p, &mut q);
    assert_eq!(p, Pair::new(1, String::from("p")));
    assert_eq!(q, Pair::new(2, String::from("q")));
}

#[test]
fn swap_skips_elided() {
    let mut p = Pair::new(Empty, 10u16);
    let mut q = Pair::new(Empty, 20u16);
    p.swap(&mut q);
    assert_eq!(*p.second(), 20);
    assert_eq!(*q.second(), 10);

    let mut p = Pair::new(10u16, Empty);
    let mut q = Pair::new(20u16, Empty);
    p.swap(&mut q);
    assert_eq!(*p.first(), 20);
    assert_eq!(*q.first(), 10);

    let mut p = Pair::new(Empty, Other {});
    let mut q = Pair::new(Empty, Other {});
    p.swap(&mut q);
    assert_eq!(p, q);
}

#[test]
fn lexicographic_order() {
    assert!(Pair::new(1, "a") < Pair::new(1, "b"));
    assert!(Pair::new(1, "b") < Pair::new(2, "a"));
    assert!(Pair::new(2, "a") > Pair::new(1, "z"));
    assert!(Pair::new(1, "a") <= Pair::new(1, "a"));
    assert!(Pair::new(1, "a") >= Pair::new(1, "a"));
    assert_eq!(Pair::new(1, "a").cmp(&Pair::new(1, "a")), Ordering::Equal);

    let mut pairs = vec![Pair::new(2, 'a'), Pair::new(1, 'b'), Pair::new(1, 'a')];
    pairs.sort();
    assert_eq!(
        pairs,
        vec![Pair::new(1, 'a'), Pair::new(1, 'b'), Pair::new(2, 'a')]
    );
}

#[test]
fn partial_order() {
    let nan = Pair::new(f64::NAN, 1u8);
    assert_eq!(nan.partial_cmp(&Pair::new(0.0, 1)), None);
    // `second` is never consulted when `first` already decides.
    assert_eq!(
        Pair::new(0.0, f64::NAN).partial_cmp(&Pair::new(1.0, 0.0)),
        Some(Ordering::Less)
    );
}

#[test]
fn equality() {
    assert_eq!(Pair::new(1, 2), Pair::new(1, 2));
    assert_ne!(Pair::new(1, 2), Pair::new(1, 3));
    assert_ne!(Pair::new(0, 2), Pair::new(1, 2));

    // equality without ordering
    assert_eq!(Pair::new(Unordered(1), Empty), Pair::new(Unordered(1), Empty));
    assert_ne!(Pair::new(Unordered(1), Empty), Pair::new(Unordered(2), Empty));
}

#[test]
fn copy_independence() {
    let p = Pair::new(String::from("p"), 1u32);
    let mut q = p.clone();
    q.first_mut().push('!');
    assert_eq!(p.first(), "p");
    assert_eq!(q.first(), "p!");

    let a = Pair::new(1u8, Empty);
    let mut b = a;
    *b.first_mut() = 9;
    assert_eq!(*a.first(), 1);
    assert_eq!(*b.first(), 9);
}

#[test]
fn clone_from_assigns_in_place() {
    let mut target = Pair::new(String::with_capacity(64), vec![0u8; 4]);
    let source = Pair::new(String::from("src"), vec![7u8]);
    target.clone_from(&source);
    assert_eq!(target, source);
    assert!(target.first().capacity() >= 64);
}

#[test]
fn hash_and_debug() {
    assert_eq!(hash_of(&Pair::new(1u8, "x")), hash_of(&Pair::new(1u8, "x")));
    assert_ne!(hash_of(&Pair::new(1u8, "x")), hash_of(&Pair::new(1u8, "y")));
    assert_eq!(
        format!("{:?}", Pair::new(1u8, Empty)),
        "Pair { first: 1, second: Empty }"
    );
}

#[test]
fn tuple_conversions() {
    let pair: Pair<String, u64> = ("key", 7u32).into();
    assert_eq!(pair.first(), "key");
    assert_eq!(*pair.second(), 7);

    let (key, value): (String, u64) = pair.into();
    assert_eq!((key.as_str(), value), ("key", 7));
}

#[test]
fn nested_pairs() {
    let mut outer = Pair::new(Pair::new(Empty, 1u32), Pair::new(2u32, Other {}));
    *outer.first_mut().second_mut() += 10;
    assert_eq!(*outer.first().second(), 11);
    assert_eq!(*outer.second().first(), 2);
    assert_eq!(Pair::<Pair<Empty, u32>, Empty>::LEN, 2);
}

#[test]
fn std_elements() {
    let mut index: Pair<HashMap<&str, u32>, Empty> = Pair::default();
    index.first_mut().insert("a", 1);
    assert_eq!(index.first().get("a"), Some(&1));
    assert_eq!(size_of::<Pair<HashMap<&str, u32>, Empty>>(), size_of::<HashMap<&str, u32>>());

    let mut pairs = vec![
        Pair::new(Reverse(1u32), 'a'),
        Pair::new(Reverse(3), 'b'),
        Pair::new(Reverse(2), 'c'),
    ];
    pairs.sort();
    let order: Vec<char> = pairs.iter().map(|p| *p.second()).collect();
    assert_eq!(order, ['b', 'c', 'a']);
}
