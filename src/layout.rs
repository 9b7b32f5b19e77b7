use crate::element::{Element, ElementKind};

/// Storage type selected for a pair of `T1` and `T2`.
pub type Layout<T1, T2> = <<T1 as Element>::Kind as ElementKind>::Select<T1, T2>;

/// Physical layout of a [Pair](crate::Pair).
///
/// The variant is a pure function of the element classifications; see
/// [Variant::select].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Both elements are plain fields.
    BothStateful,
    /// `first` is elided, `second` is a plain field.
    FirstZeroSecondStateful,
    /// `first` is a plain field, `second` is elided.
    FirstStatefulSecondZero,
    /// Both elements are elided.
    BothZero,
}

impl Variant {
    /// | first zero-size | second zero-size | variant |
    /// |---|---|---|
    /// | no | no | [BothStateful](Variant::BothStateful) |
    /// | yes | no | [FirstZeroSecondStateful](Variant::FirstZeroSecondStateful) |
    /// | no | yes | [FirstStatefulSecondZero](Variant::FirstStatefulSecondZero) |
    /// | yes | yes | [BothZero](Variant::BothZero) |
    pub const fn select(first_zero: bool, second_zero: bool) -> Self {
        match (first_zero, second_zero) {
            (false, false) => Variant::BothStateful,
            (true, false) => Variant::FirstZeroSecondStateful,
            (false, true) => Variant::FirstStatefulSecondZero,
            (true, true) => Variant::BothZero,
        }
    }

    #[inline]
    pub const fn first_elided(self) -> bool {
        matches!(self, Variant::FirstZeroSecondStateful | Variant::BothZero)
    }

    #[inline]
    pub const fn second_elided(self) -> bool {
        matches!(self, Variant::FirstStatefulSecondZero | Variant::BothZero)
    }
}
