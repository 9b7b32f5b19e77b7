use crate::{element::Element, pair::Pair};

/// Index-based access to the elements of a [Pair].
///
/// Implemented for `I = 0` (`first`) and `I = 1` (`second`) only; any other
/// index does not compile:
///
/// ```compile_fail
/// use cpair::Pair;
///
/// let pair = Pair::new(5u32, "x");
/// let _ = pair.get::<2>();
/// ```
pub trait Positional<const I: usize>: Sized {
    type Output;

    fn get(&self) -> &Self::Output;

    fn get_mut(&mut self) -> &mut Self::Output;

    /// Moves the element out, consuming the pair.
    fn take(self) -> Self::Output;
}

impl<T1: Element, T2: Element> Positional<0> for Pair<T1, T2> {
    type Output = T1;

    #[inline]
    fn get(&self) -> &T1 {
        self.first()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T1 {
        self.first_mut()
    }

    #[inline]
    fn take(self) -> T1 {
        self.into_first()
    }
}

impl<T1: Element, T2: Element> Positional<1> for Pair<T1, T2> {
    type Output = T2;

    #[inline]
    fn get(&self) -> &T2 {
        self.second()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T2 {
        self.second_mut()
    }

    #[inline]
    fn take(self) -> T2 {
        self.into_second()
    }
}

impl<T1: Element, T2: Element> Pair<T1, T2> {
    /// Borrows the element at position `I`.
    ///
    /// ```
    /// use cpair::Pair;
    ///
    /// let pair = Pair::new(5u32, "x");
    /// assert_eq!(*pair.get::<0>(), 5);
    /// assert_eq!(*pair.get::<1>(), "x");
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> &<Self as Positional<I>>::Output
    where
        Self: Positional<I>,
    {
        <Self as Positional<I>>::get(self)
    }

    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <Self as Positional<I>>::Output
    where
        Self: Positional<I>,
    {
        <Self as Positional<I>>::get_mut(self)
    }

    /// Moves the element at position `I` out of the pair.
    #[inline]
    pub fn take<const I: usize>(self) -> <Self as Positional<I>>::Output
    where
        Self: Positional<I>,
    {
        <Self as Positional<I>>::take(self)
    }
}
