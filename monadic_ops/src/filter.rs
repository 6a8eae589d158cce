use crate::{Operator, Optional};
use core::{fmt, marker::PhantomData};

/// Keeps the value of an optional only if `predicate` holds for it.
///
/// The predicate borrows the value and is called at most once; an empty
/// input never reaches it. A kept value is forwarded with its original value
/// category, so the result type always equals the forwarded input type.
///
/// ```rust
/// use monadic_ops::{filter, resolve};
///
/// assert_eq!(resolve!(Some(25), filter(|x: &i32| *x > 5)), Some(25));
/// assert_eq!(resolve!(Some(25), filter(|x: &i32| *x < 5)), None);
///
/// // a borrowed input is filtered without copying
/// let word = Some(String::from("world"));
/// let kept = resolve!(&word, filter(|s: &&String| s.len() == 5));
/// assert!(std::ptr::eq(kept.unwrap(), word.as_ref().unwrap()));
/// ```
///
/// Filtering never changes the value type:
///
/// ```compile_fail
/// use monadic_ops::{filter, resolve};
///
/// let _: Option<String> = resolve!(Some(5), filter(|x: &i32| *x > 0));
/// ```
pub fn filter<P, T>(predicate: P) -> Filter<P, T>
where
    P: FnOnce(&T) -> bool,
{
    Filter {
        predicate,
        ty: PhantomData,
    }
}

/// The operator returned by [`filter`].
pub struct Filter<P, T> {
    predicate: P,
    ty: PhantomData<fn(&T) -> bool>,
}

impl<I, P, T> Operator<I> for Filter<P, T>
where
    I: Optional<Value = T>,
    P: FnOnce(&T) -> bool,
{
    type Output = Option<T>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", name = "filter", skip_all)
    )]
    fn apply(self, input: I) -> Self::Output {
        let value = input.into_option()?;
        if (self.predicate)(&value) {
            Some(value)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!("predicate rejected the value");
            None
        }
    }
}

impl<P: Clone, T> Clone for Filter<P, T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            ty: PhantomData,
        }
    }
}

impl<P: Copy, T> Copy for Filter<P, T> {}

impl<P, T> fmt::Debug for Filter<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}
