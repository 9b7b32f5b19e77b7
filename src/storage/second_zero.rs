use super::{Elided, SecondSlot, Storage, private::Sealed};
use crate::layout::Variant;
use std::mem;

/// `first` stored as a plain field, `second` elided.
#[derive(Debug, Clone, Copy)]
pub struct FirstStatefulSecondZero<T1, T2> {
    first: T1,
    second: Elided<T2, SecondSlot>,
}

impl<T1, T2> Sealed for FirstStatefulSecondZero<T1, T2> {}

impl<T1, T2> Storage for FirstStatefulSecondZero<T1, T2> {
    type First = T1;
    type Second = T2;

    const VARIANT: Variant = Variant::FirstStatefulSecondZero;

    #[inline]
    fn from_parts(first: T1, second: T2) -> Self {
        Self {
            first,
            second: Elided::new(second),
        }
    }

    #[inline]
    fn first(&self) -> &T1 {
        &self.first
    }

    #[inline]
    fn first_mut(&mut self) -> &mut T1 {
        &mut self.first
    }

    #[inline]
    fn second(&self) -> &T2 {
        self.second.get()
    }

    #[inline]
    fn second_mut(&mut self) -> &mut T2 {
        self.second.get_mut()
    }

    #[inline]
    fn split_mut(&mut self) -> (&mut T1, &mut T2) {
        (&mut self.first, self.second.get_mut())
    }

    #[inline]
    fn into_parts(self) -> (T1, T2) {
        (self.first, self.second.into_inner())
    }

    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.first, &mut other.first);
    }
}
