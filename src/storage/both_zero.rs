use super::{Elided, FirstSlot, SecondSlot, Storage, private::Sealed};
use crate::layout::Variant;

/// Both elements elided. `T1` and `T2` may be the same type: the slot tags
/// keep the two members distinct.
#[derive(Debug, Clone, Copy)]
pub struct BothZero<T1, T2> {
    first: Elided<T1, FirstSlot>,
    second: Elided<T2, SecondSlot>,
}

impl<T1, T2> Sealed for BothZero<T1, T2> {}

impl<T1, T2> Storage for BothZero<T1, T2> {
    type First = T1;
    type Second = T2;

    const VARIANT: Variant = Variant::BothZero;

    #[inline]
    fn from_parts(first: T1, second: T2) -> Self {
        Self {
            first: Elided::new(first),
            second: Elided::new(second),
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
        self.second.get()
    }

    #[inline]
    fn second_mut(&mut self) -> &mut T2 {
        self.second.get_mut()
    }

    #[inline]
    fn split_mut(&mut self) -> (&mut T1, &mut T2) {
        (self.first.get_mut(), self.second.get_mut())
    }

    #[inline]
    fn into_parts(self) -> (T1, T2) {
        (self.first.into_inner(), self.second.into_inner())
    }

    // Nothing to exchange.
    #[inline]
    fn swap(&mut self, _other: &mut Self) {}
}
