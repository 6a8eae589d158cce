//! The set of optional-like values an [`Operator`](crate::Operator) accepts.
//!
//! An optional can reach an operator in three ways, and each one determines
//! how its value is forwarded to the wrapped callable:
//!
//! | Input              | Forwarded value |
//! |--------------------|-----------------|
//! | `Option<T>`        | `T` (moved)     |
//! | `&mut Option<T>`   | `&mut T`        |
//! | `&Option<T>`       | `&T`            |
//!
//! The same trait classifies what an [`and_then`](crate::and_then) callable
//! returns: an owned option is passed through, while a borrowed option is
//! narrowed to an option of a borrow of its contents.

use crate::OptionalError;

/// A value that may or may not hold a [`Optional::Value`].
pub trait Optional: Sized {
    /// The value forwarded when the optional is present.
    type Value;

    /// Converts into an [`Option`] of the forwarded value.
    fn into_option(self) -> Option<Self::Value>;

    /// Returns the forwarded value, or [`OptionalError::EmptyAccess`] if
    /// there is none.
    ///
    /// ```rust
    /// use monadic_ops::{Optional, OptionalError};
    ///
    /// assert_eq!(Some(3).try_value(), Ok(3));
    /// assert_eq!(
    ///     Option::<i32>::None.try_value(),
    ///     Err(OptionalError::EmptyAccess)
    /// );
    /// ```
    fn try_value(self) -> Result<Self::Value, OptionalError> {
        self.into_option().ok_or(OptionalError::EmptyAccess)
    }
}

impl<T> Optional for Option<T> {
    type Value = T;

    #[inline(always)]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<'a, T> Optional for &'a Option<T> {
    type Value = &'a T;

    #[inline(always)]
    fn into_option(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<'a, T> Optional for &'a mut Option<T> {
    type Value = &'a mut T;

    #[inline(always)]
    fn into_option(self) -> Option<&'a mut T> {
        self.as_mut()
    }
}
