use thiserror::Error;

/// Failure of a fallible piecewise construction.
///
/// Carries the element's own error unchanged. When `Second` is returned the
/// already built `first` element has been dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PiecewiseError<E1, E2> {
    #[error("failed to construct first element: {0}")]
    First(E1),
    #[error("failed to construct second element: {0}")]
    Second(E2),
}

impl<E> PiecewiseError<E, E> {
    /// Returns the element error, whichever side produced it.
    pub fn into_inner(self) -> E {
        match self {
            PiecewiseError::First(err) | PiecewiseError::Second(err) => err,
        }
    }
}

pub type PairResult<T, E1, E2> = Result<T, PiecewiseError<E1, E2>>;
