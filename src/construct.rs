/// Builds a value from a tuple of constructor arguments.
///
/// Used by [Pair::piecewise](crate::Pair::piecewise) so each element can be
/// built from its own argument group, including types with neither `Default`
/// nor `Clone`:
///
/// ```
/// use cpair::{Element, FromArgs, Pair};
///
/// #[derive(Element)]
/// struct Socket {
///     host: String,
///     port: u16,
/// }
///
/// impl FromArgs<(&str, u16)> for Socket {
///     fn from_args((host, port): (&str, u16)) -> Self {
///         Socket { host: host.to_owned(), port }
///     }
/// }
///
/// let pair: Pair<Socket, Vec<u8>> = Pair::piecewise(("localhost", 8080u16), ());
/// assert_eq!(pair.first().port, 8080);
/// assert!(pair.second().is_empty());
/// ```
pub trait FromArgs<Args>: Sized {
    fn from_args(args: Args) -> Self;
}

impl<T: Default> FromArgs<()> for T {
    #[inline]
    fn from_args(_: ()) -> Self {
        T::default()
    }
}

/// A single argument is converted with [Into], so `("text",)` builds a `String`.
impl<T, U: Into<T>> FromArgs<(U,)> for T {
    #[inline]
    fn from_args((value,): (U,)) -> Self {
        value.into()
    }
}
