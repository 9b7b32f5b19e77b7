use crate::{
    element::{Element, check_sealed, is_zero_size},
    flags::ElementFlags,
};
use std::{alloc::Layout, fmt};

/// Everything the layout selection knows about an element type.
///
/// A `Descriptor` is a readable view of facts the type system already
/// encodes; nothing in it is decided at runtime.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    layout: Layout,
    type_name: &'static str,
    flags: ElementFlags,
}

impl Descriptor {
    /// Not a `const fn`: [std::any::type_name] is not callable in const context.
    pub fn of<T: Element>() -> Self {
        const { check_sealed::<T>() };
        let layout = Layout::new::<T>();

        let mut flags = ElementFlags::empty();
        if is_zero_size::<T>() {
            flags.insert(ElementFlags::ZERO_SIZE);
        }
        if layout.size() == 0 {
            flags.insert(ElementFlags::NO_STORAGE);
            if !T::SEALED {
                flags.insert(ElementFlags::EMBEDDABLE);
            }
        }
        if T::SEALED {
            flags.insert(ElementFlags::SEALED);
        }
        if std::mem::needs_drop::<T>() {
            flags.insert(ElementFlags::NEEDS_DROP);
        }

        Self {
            layout,
            type_name: std::any::type_name::<T>(),
            flags,
        }
    }

    #[inline]
    pub const fn flags(&self) -> ElementFlags {
        self.flags
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn is_zero_size(&self) -> bool {
        self.flags.contains(ElementFlags::ZERO_SIZE)
    }

    #[inline]
    pub const fn is_sealed(&self) -> bool {
        self.flags.contains(ElementFlags::SEALED)
    }

    #[inline]
    pub const fn is_embeddable(&self) -> bool {
        self.flags.contains(ElementFlags::EMBEDDABLE)
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    pub const fn align(&self) -> usize {
        self.layout.align()
    }

    #[inline]
    pub const fn size_align(&self) -> (usize, usize) {
        (self.size(), self.align())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("type_name", &self.type_name)
            .field("size", &self.size())
            .field("align", &self.align())
            .field("flags", &self.flags)
            .finish()
    }
}
