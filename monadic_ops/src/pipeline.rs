#![allow(non_snake_case)]

use crate::{Operator, Optional};

/// An ordered tuple of [`Operator`]s, applied left to right.
///
/// Implemented for tuples of one to twelve operators where each operator
/// accepts the output of the one before it.
pub trait Pipeline<I> {
    /// The optional produced by the last operator.
    type Output: Optional;

    /// Feeds `input` through every operator in order.
    fn run(self, input: I) -> Self::Output;
}

/// Applies `pipeline` to `initial`, one operator after another.
///
/// Each operator runs to completion, including any side effects of the
/// callable it wraps, before the next one starts. `resolve` never skips an
/// operator; an empty intermediate value simply flows into the next one,
/// which leaves it empty without calling its callable (or, for
/// [`or_else`](crate::or_else), recovers from it).
///
/// ```rust
/// use monadic_ops::{and_then, resolve, transform};
///
/// let doubled = resolve(
///     Some(3),
///     (transform(|x: i32| x + 1), and_then(|x: i32| Some(x * 2))),
/// );
/// assert_eq!(doubled, Some(8));
/// ```
///
/// The [`resolve!`](crate::resolve!) macro accepts the operators as separate
/// arguments.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
pub fn resolve<I, P>(initial: I, pipeline: P) -> P::Output
where
    P: Pipeline<I>,
{
    pipeline.run(initial)
}

/// Applies one or more operators to an initial optional, left to right.
///
/// `resolve!(x, a, b, c)` is the same as `resolve(x, (a, b, c))`.
///
/// ```rust
/// use monadic_ops::{and_then, or_else, resolve, transform};
///
/// let value = resolve!(
///     Some(5),
///     transform(|x: i32| x * 2),
///     and_then(|x: i32| if x < 2 { Some(x + 3) } else { None }),
///     or_else(|| 0),
/// );
/// assert_eq!(value, Some(0));
/// ```
#[macro_export]
macro_rules! resolve {
    ($initial:expr, $($operator:expr),+ $(,)?) => {
        $crate::resolve($initial, ($($operator,)+))
    };
}

impl<I, A> Pipeline<I> for (A,)
where
    A: Operator<I>,
{
    type Output = A::Output;

    #[inline(always)]
    fn run(self, input: I) -> Self::Output {
        self.0.apply(input)
    }
}

macro_rules! impl_pipeline {
    ($first:ident, $($rest:ident),+) => {
        impl<I, $first, $($rest),+> Pipeline<I> for ($first, $($rest),+)
        where
            $first: Operator<I>,
            ($($rest,)+): Pipeline<<$first as Operator<I>>::Output>,
        {
            type Output = <($($rest,)+) as Pipeline<
                <$first as Operator<I>>::Output,
            >>::Output;

            fn run(self, input: I) -> Self::Output {
                let ($first, $($rest),+) = self;
                ($($rest,)+).run($first.apply(input))
            }
        }
    };
}

impl_pipeline!(A, B);
impl_pipeline!(A, B, C);
impl_pipeline!(A, B, C, D);
impl_pipeline!(A, B, C, D, E);
impl_pipeline!(A, B, C, D, E, F);
impl_pipeline!(A, B, C, D, E, F, G);
impl_pipeline!(A, B, C, D, E, F, G, H);
impl_pipeline!(A, B, C, D, E, F, G, H, J);
impl_pipeline!(A, B, C, D, E, F, G, H, J, K);
impl_pipeline!(A, B, C, D, E, F, G, H, J, K, L);
impl_pipeline!(A, B, C, D, E, F, G, H, J, K, L, M);
