macro_rules! impl_bitflags {
    ($type:ty) => {
        impl $type {
            #[inline]
            /// Returns an empty set of flags.
            pub const fn empty() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn bits(self) -> u8 {
                self.0
            }

            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            #[inline]
            pub const fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            #[inline]
            pub const fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            #[inline]
            pub const fn intersects(self, other: Self) -> bool {
                (self.0 & other.0) != 0
            }
        }

        impl std::default::Default for $type {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl std::ops::BitOr for $type {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $type {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAnd for $type {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }
    };
}

/// Compile-time facts about an element type, as reported by a
/// [Descriptor](crate::Descriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementFlags(u8);

impl ElementFlags {
    /// The element is classified zero-size and is stored in an elided slot.
    pub const ZERO_SIZE: Self = Self(1 << 0);

    /// Values of the type occupy no bytes.
    pub const NO_STORAGE: Self = Self(1 << 1);

    /// The type is marked as never embedded.
    pub const SEALED: Self = Self(1 << 2);

    /// Dropping a value runs code.
    pub const NEEDS_DROP: Self = Self(1 << 3);

    /// The type occupies no bytes and is not sealed.
    pub const EMBEDDABLE: Self = Self(1 << 4);
}

impl_bitflags!(ElementFlags);
