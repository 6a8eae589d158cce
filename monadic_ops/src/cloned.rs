use crate::{Operator, Optional};
use core::{fmt, marker::PhantomData, ops::Deref};

/// Turns an optional of a borrowed value into an optional that owns a clone
/// of it.
///
/// Nothing is cloned when the input is empty. Placed after a [`filter`] on a
/// borrowed input, this produces an independent value with exactly one clone,
/// and only if the value was kept.
///
/// ```rust
/// use monadic_ops::{cloned, filter, resolve};
///
/// let word = Some(String::from("hello"));
/// let owned: Option<String> =
///     resolve!(&word, filter(|s: &&String| s.starts_with('h')), cloned());
/// assert_eq!(owned.as_deref(), Some("hello"));
/// ```
///
/// [`filter`]: crate::filter
pub fn cloned<T>() -> Cloned<T> {
    Cloned { ty: PhantomData }
}

/// The operator returned by [`cloned`].
pub struct Cloned<T> {
    ty: PhantomData<fn() -> T>,
}

impl<I, T> Operator<I> for Cloned<T>
where
    I: Optional,
    I::Value: Deref<Target = T>,
    T: Clone,
{
    type Output = Option<T>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "cloned", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        input.into_option().map(|value| (*value).clone())
    }
}

impl<T> Clone for Cloned<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cloned<T> {}

impl<T> fmt::Debug for Cloned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cloned")
    }
}
