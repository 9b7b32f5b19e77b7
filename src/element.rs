use crate::storage::{
    BothStateful, BothZero, FirstStatefulSecondZero, FirstZeroSecondStateful, Storage,
};
use cpair_macros::all_tuples;
use private::Sealed;
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    cmp::{Ordering, Reverse},
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    ffi::{CString, OsString},
    marker::{PhantomData, PhantomPinned},
    mem::ManuallyDrop,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Saturating, Wrapping,
    },
    path::PathBuf,
    pin::Pin,
    rc::{self, Rc},
    sync::{
        self, Arc, Mutex, RwLock,
        atomic::{
            AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicIsize, AtomicPtr, AtomicU8,
            AtomicU16, AtomicU32, AtomicUsize,
        },
    },
    time::{Duration, Instant, SystemTime},
};

mod private {
    pub trait Sealed {}
}

/// Layout classification of an element type.
///
/// Implemented only by [Stateful] and [ZeroSized]. Besides the flag, each kind
/// drives the storage selection for a pair: the first element's kind picks
/// `Select`, which hands over to the second element's kind through
/// `AfterStateful` / `AfterZero`.
pub trait ElementKind: Sealed + 'static {
    const IS_ZERO_SIZE: bool;

    /// Storage for a pair whose first element has this kind.
    type Select<T1, T2: Element>: Storage<First = T1, Second = T2>;

    /// Storage for a pair whose first element is stateful and second element has this kind.
    type AfterStateful<T1, T2>: Storage<First = T1, Second = T2>;

    /// Storage for a pair whose first element is zero-size and second element has this kind.
    type AfterZero<T1, T2>: Storage<First = T1, Second = T2>;

    /// Kind of a composite holding a value of this kind and a value of kind `K`.
    type And<K: ElementKind>: ElementKind;
}

/// The element carries state, or must not be embedded. Stored as a plain field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stateful;

/// The element carries no state and may be embedded. Stored in an elided slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSized;

impl Sealed for Stateful {}
impl Sealed for ZeroSized {}

impl ElementKind for Stateful {
    const IS_ZERO_SIZE: bool = false;

    type Select<T1, T2: Element> = <T2::Kind as ElementKind>::AfterStateful<T1, T2>;
    type AfterStateful<T1, T2> = BothStateful<T1, T2>;
    type AfterZero<T1, T2> = FirstZeroSecondStateful<T1, T2>;
    type And<K: ElementKind> = Stateful;
}

impl ElementKind for ZeroSized {
    const IS_ZERO_SIZE: bool = true;

    type Select<T1, T2: Element> = <T2::Kind as ElementKind>::AfterZero<T1, T2>;
    type AfterStateful<T1, T2> = FirstStatefulSecondZero<T1, T2>;
    type AfterZero<T1, T2> = BothZero<T1, T2>;
    type And<K: ElementKind> = K;
}

/// A type that can be stored in a [Pair](crate::Pair).
///
/// Usually derived:
///
/// ```
/// use cpair::{Element, is_zero_size};
///
/// #[derive(Element)]
/// struct Hasher;
///
/// #[derive(Element)]
/// #[element(sealed)]
/// struct Final;
///
/// #[derive(Element)]
/// struct Counter(u32);
///
/// assert!(is_zero_size::<Hasher>());
/// assert!(!is_zero_size::<Final>());
/// assert!(!is_zero_size::<Counter>());
/// ```
///
/// Declaring a type with state as [ZeroSized] is rejected at compile time as
/// soon as it is placed in a pair:
///
/// ```compile_fail
/// use cpair::{Element, Pair, ZeroSized};
///
/// struct Handle(u32);
///
/// impl Element for Handle {
///     type Kind = ZeroSized;
/// }
///
/// let pair = Pair::new(Handle(1), 2u8);
/// ```
///
/// So is a [ZeroSized] type that is also `SEALED`, since a sealed type must
/// be stored as a field:
///
/// ```compile_fail
/// use cpair::{Element, Pair, ZeroSized};
///
/// struct Final;
///
/// impl Element for Final {
///     type Kind = ZeroSized;
///     const SEALED: bool = true;
/// }
///
/// let pair = Pair::new(Final, 2u8);
/// ```
///
/// Types from other crates that do not implement `Element` can be wrapped in
/// a [Field](crate::Field).
pub trait Element: Sized {
    type Kind: ElementKind;

    /// The type must not be embedded, even if it has no state.
    const SEALED: bool = false;
}

/// Returns `true` if `T` is laid out in an elided slot.
#[inline]
pub const fn is_zero_size<T: Element>() -> bool {
    <T::Kind as ElementKind>::IS_ZERO_SIZE
}

/// Panics, and so fails const evaluation, if `T` is both sealed and zero-size.
pub(crate) const fn check_sealed<T: Element>() {
    assert!(
        !(T::SEALED && is_zero_size::<T>()),
        "a sealed element must be classified as Stateful"
    );
}

macro_rules! impl_stateful {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                type Kind = Stateful;
            }
        )*
    };
}

macro_rules! impl_stateful_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Element for $ty<$($param),+> {
                type Kind = Stateful;
            }
        )*
    };
}

impl_stateful!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, PathBuf, OsString, CString,
    Ordering, Duration, Instant, SystemTime,
    Ipv4Addr, Ipv6Addr, IpAddr, SocketAddr,
);

impl_stateful!(
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);

impl_stateful!(
    AtomicBool, AtomicU8, AtomicU16, AtomicU32, AtomicUsize,
    AtomicI8, AtomicI16, AtomicI32, AtomicIsize,
);

#[cfg(target_has_atomic = "64")]
impl_stateful!(std::sync::atomic::AtomicU64, std::sync::atomic::AtomicI64);

impl_stateful_generic!(
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
    VecDeque<T>,
    BinaryHeap<T>,
    LinkedList<T>,
    Mutex<T>,
    RwLock<T>,
    AtomicPtr<T>,
    Wrapping<T>,
    Saturating<T>,
    Reverse<T>,
    ManuallyDrop<T>,
    Pin<P>,
);

impl<T> Element for Vec<T> {
    type Kind = Stateful;
}

impl<T: ?Sized> Element for Box<T> {
    type Kind = Stateful;
}

impl<T> Element for Option<T> {
    type Kind = Stateful;
}

impl<T, E> Element for Result<T, E> {
    type Kind = Stateful;
}

impl<T: ?Sized> Element for Rc<T> {
    type Kind = Stateful;
}

impl<T: ?Sized> Element for Arc<T> {
    type Kind = Stateful;
}

impl<T: ?Sized> Element for rc::Weak<T> {
    type Kind = Stateful;
}

impl<T: ?Sized> Element for sync::Weak<T> {
    type Kind = Stateful;
}

impl<'a, B: ?Sized + ToOwned> Element for Cow<'a, B> {
    type Kind = Stateful;
}

impl<T> Element for Cell<T> {
    type Kind = Stateful;
}

impl<T> Element for RefCell<T> {
    type Kind = Stateful;
}

impl<T, const N: usize> Element for [T; N] {
    type Kind = Stateful;
}

// References and function pointers are never embedded.
impl<'a, T: ?Sized> Element for &'a T {
    type Kind = Stateful;
    const SEALED: bool = true;
}

impl<'a, T: ?Sized> Element for &'a mut T {
    type Kind = Stateful;
    const SEALED: bool = true;
}

impl<T: ?Sized> Element for PhantomData<T> {
    type Kind = ZeroSized;
}

impl Element for PhantomPinned {
    type Kind = ZeroSized;
}

impl Element for () {
    type Kind = ZeroSized;
}

macro_rules! tuple_kind {
    ($head:ident) => { <$head as Element>::Kind };
    ($head:ident, $($tail:ident),+) => {
        <<$head as Element>::Kind as ElementKind>::And<tuple_kind!($($tail),+)>
    };
}

macro_rules! impl_element_tuple {
    ($($name:ident),+) => {
        impl<$($name: Element),+> Element for ($($name,)+) {
            type Kind = tuple_kind!($($name),+);
        }
    };
}

all_tuples!(impl_element_tuple, 1, 12);

macro_rules! impl_element_fn {
    ($($name:ident),*) => {
        impl<R $(, $name)*> Element for fn($($name),*) -> R {
            type Kind = Stateful;
            const SEALED: bool = true;
        }
    };
}

impl_element_fn!();
all_tuples!(impl_element_fn, 1, 6);
