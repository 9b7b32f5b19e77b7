/// Builds a [Pair](crate::Pair).
///
/// - `pair!(a, b)` takes both elements by value.
/// - `pair!(@piecewise (args..), (args..))` builds each element from its own
///   argument group through [FromArgs](crate::FromArgs).
///
/// ```
/// use cpair::{Pair, pair};
///
/// let p: Pair<u32, String> = pair!(1, String::from("a"));
/// let q: Pair<u32, String> = pair!(@piecewise (1u32), ());
/// assert_eq!(p.first(), q.first());
/// assert!(q.second().is_empty());
/// ```
#[macro_export]
macro_rules! pair {
    (@piecewise ($($first:expr),* $(,)?), ($($second:expr),* $(,)?)) => {
        $crate::Pair::piecewise(($($first,)*), ($($second,)*))
    };

    ($first:expr, $second:expr $(,)?) => {
        $crate::Pair::new($first, $second)
    };
}
