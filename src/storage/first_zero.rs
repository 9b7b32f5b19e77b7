use super::{Elided, FirstSlot, Storage, private::Sealed};
use crate::layout::Variant;
use std::mem;

/// `first` elided, `second` stored as a plain field.
#[derive(Debug, Clone, Copy)]
pub struct FirstZeroSecondStateful<T1, T2> {
    first: Elided<T1, FirstSlot>,
    second: T2,
}

impl<T1, T2> Sealed for FirstZeroSecondStateful<T1, T2> {}

impl<T1, T2> Storage for FirstZeroSecondStateful<T1, T2> {
    type First = T1;
    type Second = T2;

    const VARIANT: Variant = Variant::FirstZeroSecondStateful;

    #[inline]
    fn from_parts(first: T1, second: T2) -> Self {
        Self {
            first: Elided::new(first),
            second,
        }
    }

    #[inline]
    fn first(&self) -> &T1 {
        self.first.get()
    }

    #[inline]
    fn first_mut(&mut self) -> &mut T1 {
        self.first.get_mut()
    }

    #[inline]
    fn second(&self) -> &T2 {
        &self.second
    }

    #[inline]
    fn second_mut(&mut self) -> &mut T2 {
        &mut self.second
    }

    #[inline]
    fn split_mut(&mut self) -> (&mut T1, &mut T2) {
        (self.first.get_mut(), &mut self.second)
    }

    #[inline]
    fn into_parts(self) -> (T1, T2) {
        (self.first.into_inner(), self.second)
    }

    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.second, &mut other.second);
    }
}
