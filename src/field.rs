use crate::element::{Element, Stateful};
use std::ops::{Deref, DerefMut};

/// Stores any `T` as a [Stateful] element.
///
/// A type from another crate cannot implement [Element] here, nor can
/// `Element` be implemented for it downstream. Wrapping it makes it usable in
/// a [Pair](crate::Pair) anyway:
///
/// ```
/// use cpair::{Field, Pair};
/// use std::ops::Range;
///
/// let mut pair: Pair<Field<Range<u32>>, u8> = Pair::new(Field(0..4), 1);
/// pair.first_mut().end = 8;
/// assert_eq!(pair.into_first().into_inner(), 0..8);
/// ```
///
/// The wrapped value is always kept in a field, even when `T` has no state.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field<T>(pub T);

impl<T> Field<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Element for Field<T> {
    type Kind = Stateful;
}

impl<T> From<T> for Field<T> {
    #[inline]
    fn from(value: T) -> Self {
        Field(value)
    }
}

impl<T> Deref for Field<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Field<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
