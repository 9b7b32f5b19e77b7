use super::{Storage, private::Sealed};
use crate::layout::Variant;
use std::mem;

/// Both elements stored as plain fields.
#[derive(Debug, Clone, Copy)]
pub struct BothStateful<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Sealed for BothStateful<T1, T2> {}

impl<T1, T2> Storage for BothStateful<T1, T2> {
    type First = T1;
    type Second = T2;

    const VARIANT: Variant = Variant::BothStateful;

    #[inline]
    fn from_parts(first: T1, second: T2) -> Self {
        Self { first, second }
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
        &self.second
    }

    #[inline]
    fn second_mut(&mut self) -> &mut T2 {
        &mut self.second
    }

    #[inline]
    fn split_mut(&mut self) -> (&mut T1, &mut T2) {
        (&mut self.first, &mut self.second)
    }

    #[inline]
    fn into_parts(self) -> (T1, T2) {
        (self.first, self.second)
    }

    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.first, &mut other.first);
        mem::swap(&mut self.second, &mut other.second);
    }
}
