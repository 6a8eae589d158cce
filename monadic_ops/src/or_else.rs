use crate::{Operator, Optional};
use core::{fmt, marker::PhantomData};

/// Supplies a fallback when an optional is empty.
///
/// A present input is passed through untouched and `f` is not called. An
/// empty input calls `f` exactly once; what `f` returns decides the result,
/// see [`Fallback`] for the accepted shapes.
///
/// The result is always an `Option` of the input's forwarded value type, so
/// both branches share one type. A fallback that returns a reference to an
/// optional therefore needs a borrowed input, which makes the present branch
/// alias the input's own storage:
///
/// ```rust
/// use monadic_ops::{or_else, resolve};
///
/// assert_eq!(resolve!(None, or_else(|| 25)), Some(25));
/// assert_eq!(resolve!(Some(5), or_else(|| 25)), Some(5));
/// assert_eq!(resolve!(None::<i32>, or_else(|| None)), None);
///
/// let defaults = Some(String::from("default"));
/// let configured: Option<String> = None;
/// let chosen = resolve!(&configured, or_else(|| &defaults));
/// assert!(std::ptr::eq(chosen.unwrap(), defaults.as_ref().unwrap()));
/// ```
///
/// An owned input cannot be unified with a borrowed fallback:
///
/// ```compile_fail
/// use monadic_ops::{or_else, resolve};
///
/// let defaults = Some(5);
/// let _ = resolve!(Some(1), or_else(|| &defaults));
/// ```
pub fn or_else<F, R>(f: F) -> OrElse<F, R>
where
    F: FnOnce() -> R,
{
    OrElse {
        f,
        ty: PhantomData,
    }
}

/// The operator returned by [`or_else`].
pub struct OrElse<F, R> {
    f: F,
    ty: PhantomData<fn() -> R>,
}

impl<I, F, R> Operator<I> for OrElse<F, R>
where
    I: Optional,
    F: FnOnce() -> R,
    R: Fallback<I::Value>,
{
    type Output = Option<I::Value>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "or_else", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        match input.into_option() {
            Some(value) => Some(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("input is empty, evaluating fallback");
                (self.f)().into_fallback()
            }
        }
    }
}

impl<F: Clone, R> Clone for OrElse<F, R> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            ty: PhantomData,
        }
    }
}

impl<F: Copy, R> Copy for OrElse<F, R> {}

impl<F, R> fmt::Debug for OrElse<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrElse").finish_non_exhaustive()
    }
}

/// A value an [`or_else`] fallback may return, for an input whose forwarded
/// value type is `T`.
///
/// | Fallback returns   | Input value type `T` | Result              |
/// |--------------------|----------------------|---------------------|
/// | `T`                | `T`                  | `Some(value)`       |
/// | `&U` / `&mut U`    | `&U` / `&mut U`      | `Some(reference)`   |
/// | `Option<T>`        | `T`                  | the option itself   |
/// | `&Option<U>`       | `&U`                 | `Some(&value)` or `None` |
/// | `&mut Option<U>`   | `&mut U` or `&U`     | `Some(&mut value)` / `Some(&value)` or `None` |
///
/// An input whose value type is itself an `Option` takes plain-value
/// fallbacks, so `Option<Option<i32>>` with a fallback returning
/// `Option<i32>` yields `Some(fallback)`.
pub trait Fallback<T> {
    /// Converts the fallback into the result of [`or_else`].
    fn into_fallback(self) -> Option<T>;
}

impl<T> Fallback<T> for T {
    #[inline(always)]
    fn into_fallback(self) -> Option<T> {
        Some(self)
    }
}

impl<T> Fallback<T> for Option<T> {
    #[inline(always)]
    fn into_fallback(self) -> Option<T> {
        self
    }
}

impl<'a, T> Fallback<&'a T> for &'a Option<T> {
    #[inline(always)]
    fn into_fallback(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<'a, T> Fallback<&'a mut T> for &'a mut Option<T> {
    #[inline(always)]
    fn into_fallback(self) -> Option<&'a mut T> {
        self.as_mut()
    }
}

impl<'a, T> Fallback<&'a T> for &'a mut Option<T> {
    #[inline(always)]
    fn into_fallback(self) -> Option<&'a T> {
        self.as_ref()
    }
}
