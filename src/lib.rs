//! # cpair
//!
//! A compressed pair: a two-element container in which elements that carry no
//! state take no space, for any combination of element types.
//!
//! Each element type is classified through [Element] as [Stateful] or
//! [ZeroSized]. The two classifications select one of four storage layouts
//! ([Variant]), all behind the same [Pair] API:
//!
//! ```
//! use cpair::{Element, Pair, Variant};
//!
//! #[derive(Element, Clone, Copy, Debug, PartialEq, Default)]
//! struct Less;
//!
//! #[derive(Element, Clone, Copy, Debug, PartialEq, Default)]
//! #[element(sealed)]
//! struct Final;
//!
//! assert_eq!(Pair::<Less, u32>::VARIANT, Variant::FirstZeroSecondStateful);
//! assert_eq!(Pair::<u32, Less>::VARIANT, Variant::FirstStatefulSecondZero);
//! assert_eq!(Pair::<Less, Less>::VARIANT, Variant::BothZero);
//! assert_eq!(Pair::<Final, Less>::VARIANT, Variant::FirstStatefulSecondZero);
//!
//! let mut p = Pair::new(Less, 7u32);
//! *p.second_mut() += 1;
//! assert_eq!(p.into_tuple(), (Less, 8));
//! ```

extern crate self as cpair;

pub mod macros;
pub mod storage;

mod construct;
mod descriptor;
mod element;
mod error;
mod field;
mod flags;
mod get;
mod layout;
mod pair;

pub use construct::FromArgs;
pub use descriptor::Descriptor;
pub use element::{Element, ElementKind, Stateful, ZeroSized, is_zero_size};
pub use error::{PairResult, PiecewiseError};
pub use field::Field;
pub use flags::ElementFlags;
pub use get::Positional;
pub use layout::{Layout, Variant};
pub use pair::{Pair, swap};

pub use cpair_macros::Element;

#[cfg(test)]
mod tests;
