use crate::{Operator, Optional};
use core::{fmt, marker::PhantomData};

/// Lifts `f` over the value of an optional.
///
/// The returned operator leaves an empty input empty without calling `f`.
/// Otherwise it calls `f` exactly once with the input's value, forwarded with
/// the input's own value category, and wraps whatever `f` returns:
///
/// - a plain value is moved into the resulting `Option`,
/// - a reference yields an `Option<&U>` (or `Option<&mut U>`) that aliases the
///   referenced storage.
///
/// ```rust
/// use monadic_ops::{resolve, transform};
///
/// assert_eq!(resolve!(Some(5), transform(|x: i32| x * x)), Some(25));
/// assert_eq!(resolve!(None, transform(|x: i32| x * x)), None);
///
/// // a borrowed input forwards a borrow
/// let name = Some(String::from("ferris"));
/// assert_eq!(resolve!(&name, transform(|s: &String| s.len())), Some(6));
/// ```
///
/// A callable that returns a borrow of its own argument needs a signature
/// that ties the two lifetimes together, so it is easiest to pass a function
/// item rather than a closure:
///
/// ```rust
/// use monadic_ops::{resolve, transform};
///
/// fn first(pair: &(u32, u32)) -> &u32 {
///     &pair.0
/// }
///
/// let pair = Some((1, 2));
/// let view = resolve!(&pair, transform(first));
/// assert!(std::ptr::eq(view.unwrap(), &pair.as_ref().unwrap().0));
/// ```
pub fn transform<F, T, U>(f: F) -> Transform<F, T, U>
where
    F: FnOnce(T) -> U,
{
    Transform {
        f,
        ty: PhantomData,
    }
}

/// The operator returned by [`transform`].
pub struct Transform<F, T, U> {
    f: F,
    ty: PhantomData<fn(T) -> U>,
}

impl<I, F, T, U> Operator<I> for Transform<F, T, U>
where
    I: Optional<Value = T>,
    F: FnOnce(T) -> U,
{
    type Output = Option<U>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "transform", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        match input.into_option() {
            Some(value) => Some((self.f)(value)),
            None => None,
        }
    }
}

impl<F: Clone, T, U> Clone for Transform<F, T, U> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            ty: PhantomData,
        }
    }
}

impl<F: Copy, T, U> Copy for Transform<F, T, U> {}

impl<F, T, U> fmt::Debug for Transform<F, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}
