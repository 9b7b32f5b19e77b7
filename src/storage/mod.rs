//! The four physical layouts a [Pair](crate::Pair) can take.
//!
//! Every layout stores `first` before `second`, so elements are always
//! dropped first-then-second. A zero-size element lives in an [Elided] slot:
//! it keeps its identity (and its `Drop`) but contributes no bytes and is
//! skipped by [Storage::swap].

use crate::layout::Variant;

pub(crate) mod both_stateful;
pub(crate) mod both_zero;
pub(crate) mod elided;
pub(crate) mod first_zero;
pub(crate) mod second_zero;

pub use both_stateful::BothStateful;
pub use both_zero::BothZero;
pub use elided::{Elided, FirstSlot, SecondSlot, Slot};
pub use first_zero::FirstZeroSecondStateful;
pub use second_zero::FirstStatefulSecondZero;

pub(crate) mod private {
    pub trait Sealed {}
}

/// Operations every layout provides.
///
/// Sealed: the set of layouts is closed, and the one a pair uses is decided by
/// [Layout](crate::layout::Layout) when the pair type is named.
pub trait Storage: private::Sealed + Sized {
    type First;
    type Second;

    const VARIANT: Variant;

    fn from_parts(first: Self::First, second: Self::Second) -> Self;

    fn first(&self) -> &Self::First;

    fn first_mut(&mut self) -> &mut Self::First;

    fn second(&self) -> &Self::Second;

    fn second_mut(&mut self) -> &mut Self::Second;

    /// Mutable access to both elements at once.
    fn split_mut(&mut self) -> (&mut Self::First, &mut Self::Second);

    fn into_parts(self) -> (Self::First, Self::Second);

    /// Exchanges the stateful elements of `self` and `other`.
    fn swap(&mut self, other: &mut Self);
}
