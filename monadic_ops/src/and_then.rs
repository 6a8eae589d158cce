use crate::{Operator, Optional};
use core::{fmt, marker::PhantomData};

/// Chains `f`, a callable that itself returns an optional, after an optional.
///
/// An empty input stays empty and `f` is not called. Otherwise `f` is called
/// once with the input's value (forwarded with the input's value category),
/// and its result becomes the output:
///
/// - an owned `Option<U>` is returned as-is, so emptiness produced by `f`
///   propagates;
/// - a `&Option<U>` or `&mut Option<U>` is narrowed to `Option<&U>` or
///   `Option<&mut U>` that aliases the referenced option's contents.
///
/// ```rust
/// use monadic_ops::{and_then, resolve};
///
/// let even = |x: i32| if x % 2 == 0 { Some(x) } else { None };
/// assert_eq!(resolve!(Some(4), and_then(even)), Some(4));
/// assert_eq!(resolve!(Some(3), and_then(even)), None);
///
/// let mut cache = Some(5);
/// let slot = &mut cache;
/// let cached = resolve!(Some(25), and_then(move |_: i32| slot));
/// if let Some(value) = cached {
///     *value = 6;
/// }
/// assert_eq!(cache, Some(6));
/// ```
pub fn and_then<F, T, R>(f: F) -> AndThen<F, T, R>
where
    F: FnOnce(T) -> R,
    R: Optional,
{
    AndThen {
        f,
        ty: PhantomData,
    }
}

/// The operator returned by [`and_then`].
pub struct AndThen<F, T, R> {
    f: F,
    ty: PhantomData<fn(T) -> R>,
}

impl<I, F, T, R> Operator<I> for AndThen<F, T, R>
where
    I: Optional<Value = T>,
    F: FnOnce(T) -> R,
    R: Optional,
{
    type Output = Option<R::Value>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "and_then", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        match input.into_option() {
            Some(value) => (self.f)(value).into_option(),
            None => None,
        }
    }
}

impl<F: Clone, T, R> Clone for AndThen<F, T, R> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            ty: PhantomData,
        }
    }
}

impl<F: Copy, T, R> Copy for AndThen<F, T, R> {}

impl<F, T, R> fmt::Debug for AndThen<F, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen").finish_non_exhaustive()
    }
}
