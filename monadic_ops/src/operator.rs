use crate::Optional;

/// A unary step that maps one optional-like value to another.
///
/// Every combinator in this crate returns an `Operator`. An operator is
/// implemented for each input shape it can accept, which is how the value
/// category of the input (owned, mutably borrowed, or shared) reaches the
/// wrapped callable unchanged.
///
/// Applying an operator consumes it, so the wrapped callable only has to be
/// [`FnOnce`] and may hand out borrows of whatever it captured. Operators are
/// [`Clone`]/[`Copy`] whenever their callables are; to reuse a callable
/// without cloning, pass it by reference (`transform(&f)`).
pub trait Operator<I> {
    /// The optional produced by this step.
    type Output: Optional;

    /// Runs this step on `input`.
    fn apply(self, input: I) -> Self::Output;
}

/// Combines two operators into one that applies `first` and then `next`.
///
/// ```rust
/// use monadic_ops::{and_then, combine, transform, Operator};
///
/// let step = combine(
///     transform(|x: i32| x + 1),
///     and_then(|x: i32| (x % 2 == 0).then_some(x * 2)),
/// );
///
/// assert_eq!(step.clone().apply(Some(3)), Some(8));
/// assert_eq!(step.clone().apply(Some(4)), None);
/// assert_eq!(step.apply(None), None);
/// ```
pub fn combine<First, Next>(first: First, next: Next) -> Combine<First, Next> {
    Combine { first, next }
}

/// Two operators applied one after the other. See [`combine`].
#[derive(Debug, Clone, Copy)]
pub struct Combine<First, Next> {
    first: First,
    next: Next,
}

impl<I, First, Next> Operator<I> for Combine<First, Next>
where
    First: Operator<I>,
    Next: Operator<First::Output>,
{
    type Output = Next::Output;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "combine", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        let intermediate = self.first.apply(input);
        self.next.apply(intermediate)
    }
}
