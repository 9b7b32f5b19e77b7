use crate::{
    construct::FromArgs,
    descriptor::Descriptor,
    element::{Element, ElementKind, check_sealed},
    error::{PairResult, PiecewiseError},
    layout::{Layout, Variant},
    storage::Storage,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A two-element container whose zero-size elements take no space.
///
/// The layout is picked from the [Element] classification of `T1` and `T2`
/// when the type is named (see [Variant]) and is invisible through the API:
/// every accessor behaves as if both elements were plain fields.
///
/// Elements are dropped `first`, then `second`.
///
/// ```
/// use cpair::{Element, Pair, Variant};
///
/// #[derive(Element, Default)]
/// struct Deleter;
///
/// let pair = Pair::new(Deleter, 42u64);
/// assert_eq!(*pair.second(), 42);
/// assert_eq!(Pair::<Deleter, u64>::VARIANT, Variant::FirstZeroSecondStateful);
/// assert_eq!(size_of::<Pair<Deleter, u64>>(), size_of::<u64>());
/// ```
pub struct Pair<T1: Element, T2: Element> {
    storage: Layout<T1, T2>,
}

impl<T1: Element, T2: Element> Pair<T1, T2> {
    /// Layout used for this instantiation.
    pub const VARIANT: Variant = <Layout<T1, T2> as Storage>::VARIANT;

    /// Number of positions, see [Pair::get].
    pub const LEN: usize = 2;

    /// Every other constructor goes through `new`, so a sealed element
    /// declared [ZeroSized](crate::ZeroSized) fails the build here.
    #[inline]
    pub fn new(first: T1, second: T2) -> Self {
        const {
            check_sealed::<T1>();
            check_sealed::<T2>();
        }
        Self {
            storage: <Layout<T1, T2> as Storage>::from_parts(first, second),
        }
    }

    /// Builds each element from a value convertible into it.
    #[inline]
    pub fn convert<U1: Into<T1>, U2: Into<T2>>(first: U1, second: U2) -> Self {
        let first = first.into();
        Self::new(first, second.into())
    }

    /// `second` is default constructed.
    #[inline]
    pub fn with_first(first: T1) -> Self
    where
        T2: Default,
    {
        Self::new(first, T2::default())
    }

    /// `first` is default constructed.
    #[inline]
    pub fn with_second(second: T2) -> Self
    where
        T1: Default,
    {
        Self::new(T1::default(), second)
    }

    /// Builds `first` from `args1` and `second` from `args2`.
    #[inline]
    pub fn piecewise<A1, A2>(args1: A1, args2: A2) -> Self
    where
        T1: FromArgs<A1>,
        T2: FromArgs<A2>,
    {
        let first = T1::from_args(args1);
        Self::new(first, T2::from_args(args2))
    }

    /// Builds `first` with `f1`, then `second` with `f2`.
    ///
    /// If `f2` panics, the already built `first` is dropped during unwinding.
    #[inline]
    pub fn piecewise_with<F1, F2>(f1: F1, f2: F2) -> Self
    where
        F1: FnOnce() -> T1,
        F2: FnOnce() -> T2,
    {
        let first = f1();
        Self::new(first, f2())
    }

    /// Fallible [Pair::piecewise_with]. `f2` is not called if `f1` fails; if
    /// `f2` fails, `first` is dropped before the error is returned.
    pub fn try_piecewise_with<E1, E2, F1, F2>(f1: F1, f2: F2) -> PairResult<Self, E1, E2>
    where
        F1: FnOnce() -> Result<T1, E1>,
        F2: FnOnce() -> Result<T2, E2>,
    {
        let first = f1().map_err(PiecewiseError::First)?;
        let second = f2().map_err(PiecewiseError::Second)?;
        Ok(Self::new(first, second))
    }

    #[inline]
    pub fn first(&self) -> &T1 {
        self.storage.first()
    }

    #[inline]
    pub fn first_mut(&mut self) -> &mut T1 {
        self.storage.first_mut()
    }

    #[inline]
    pub fn second(&self) -> &T2 {
        self.storage.second()
    }

    #[inline]
    pub fn second_mut(&mut self) -> &mut T2 {
        self.storage.second_mut()
    }

    /// Borrows both elements mutably at once.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut T1, &mut T2) {
        self.storage.split_mut()
    }

    #[inline]
    pub fn as_tuple(&self) -> (&T1, &T2) {
        (self.storage.first(), self.storage.second())
    }

    #[inline]
    pub fn into_first(self) -> T1 {
        self.into_tuple().0
    }

    #[inline]
    pub fn into_second(self) -> T2 {
        self.into_tuple().1
    }

    #[inline]
    pub fn into_tuple(self) -> (T1, T2) {
        self.storage.into_parts()
    }

    /// Exchanges the elements of `self` and `other`. Zero-size elements have
    /// nothing to exchange and are left in place.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
    }

    /// Descriptors of `T1` and `T2`, in that order.
    ///
    /// ```
    /// use cpair::Pair;
    ///
    /// let (first, second) = Pair::<(), u16>::descriptors();
    /// assert!(first.is_embeddable());
    /// assert_eq!(second.size(), 2);
    /// ```
    pub fn descriptors() -> (Descriptor, Descriptor) {
        (Descriptor::of::<T1>(), Descriptor::of::<T2>())
    }
}

impl<T: Element + Clone> Pair<T, T> {
    /// Both elements are copies of `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

/// Swaps the contents of two pairs, see [Pair::swap].
#[inline]
pub fn swap<T1: Element, T2: Element>(a: &mut Pair<T1, T2>, b: &mut Pair<T1, T2>) {
    a.swap(b);
}

impl<T1, T2> Element for Pair<T1, T2>
where
    T1: Element,
    T2: Element,
{
    type Kind = <T1::Kind as ElementKind>::And<T2::Kind>;
}

impl<T1: Element + Default, T2: Element + Default> Default for Pair<T1, T2> {
    #[inline]
    fn default() -> Self {
        let first = T1::default();
        Self::new(first, T2::default())
    }
}

impl<T1: Element + Clone, T2: Element + Clone> Clone for Pair<T1, T2> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.first().clone(), self.second().clone())
    }

    /// Assigns `first`, then `second`.
    fn clone_from(&mut self, source: &Self) {
        self.first_mut().clone_from(source.first());
        self.second_mut().clone_from(source.second());
    }
}

impl<T1, T2> Copy for Pair<T1, T2>
where
    T1: Element + Copy,
    T2: Element + Copy,
    Layout<T1, T2>: Copy,
{
}

impl<T1: Element + PartialEq, T2: Element + PartialEq> PartialEq for Pair<T1, T2> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.first() == other.first() && self.second() == other.second()
    }
}

impl<T1: Element + Eq, T2: Element + Eq> Eq for Pair<T1, T2> {}

impl<T1: Element + PartialOrd, T2: Element + PartialOrd> PartialOrd for Pair<T1, T2> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.first().partial_cmp(other.first()) {
            Some(Ordering::Equal) => self.second().partial_cmp(other.second()),
            ordering => ordering,
        }
    }
}

impl<T1: Element + Ord, T2: Element + Ord> Ord for Pair<T1, T2> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first()
            .cmp(other.first())
            .then_with(|| self.second().cmp(other.second()))
    }
}

impl<T1: Element + Hash, T2: Element + Hash> Hash for Pair<T1, T2> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first().hash(state);
        self.second().hash(state);
    }
}

impl<T1: Element + fmt::Debug, T2: Element + fmt::Debug> fmt::Debug for Pair<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("first", self.first())
            .field("second", self.second())
            .finish()
    }
}

impl<T1, T2, U1, U2> From<(U1, U2)> for Pair<T1, T2>
where
    T1: Element,
    T2: Element,
    U1: Into<T1>,
    U2: Into<T2>,
{
    #[inline]
    fn from((first, second): (U1, U2)) -> Self {
        Self::convert(first, second)
    }
}

impl<T1: Element, T2: Element> From<Pair<T1, T2>> for (T1, T2) {
    #[inline]
    fn from(pair: Pair<T1, T2>) -> Self {
        pair.into_tuple()
    }
}
