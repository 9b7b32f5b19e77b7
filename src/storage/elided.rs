use const_assert::const_assert;
use std::{fmt, marker::PhantomData};

/// Tag naming which position of a pair an [Elided] value occupies.
///
/// Keeps the two elided members of a `Pair<T, T>` distinct types.
pub trait Slot: Copy + 'static {
    const INDEX: usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FirstSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SecondSlot;

impl Slot for FirstSlot {
    const INDEX: usize = 0;
}

impl Slot for SecondSlot {
    const INDEX: usize = 1;
}

/// Storage for a zero-size element.
///
/// Holds the value itself, which occupies no bytes, so the element is
/// dropped normally and references to it stay valid.
#[repr(transparent)]
pub struct Elided<T, S: Slot> {
    value: T,
    slot: PhantomData<S>,
}

impl<T, S: Slot> Elided<T, S> {
    #[inline]
    pub fn new(value: T) -> Self {
        const_assert!(
            |T| size_of::<T>() == 0,
            "element classified as ZeroSized has state, classify it as Stateful"
        );
        Self {
            value,
            slot: PhantomData,
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, S: Slot> Clone for Elided<T, S> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, S: Slot> Copy for Elided<T, S> {}

impl<T: fmt::Debug, S: Slot> fmt::Debug for Elided<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Elided")
            .field(&S::INDEX)
            .field(&self.value)
            .finish()
    }
}
