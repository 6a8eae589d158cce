#![cfg_attr(feature = "no_std", no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! Monadic combinators over [`Option`] that preserve value categories.
//!
//! Each combinator wraps a callable and returns an [`Operator`]: a step that
//! maps one optional to another. Operators are chained with [`resolve`] (or
//! the [`resolve!`] macro), which applies them left to right.
//!
//! | Combinator     | Callable              | Empty input        | Present input          |
//! |----------------|-----------------------|--------------------|------------------------|
//! | [`transform`]  | `FnOnce(T) -> U`      | empty              | `Some(f(value))`       |
//! | [`and_then`]   | `FnOnce(T) -> Option` | empty              | `f(value)`             |
//! | [`or_else`]    | `FnOnce() -> fallback`| fallback           | unchanged              |
//! | [`filter`]     | `FnOnce(&T) -> bool`  | empty              | kept or empty          |
//!
//! Inputs keep their value category. An owned `Option<T>` forwards `T` by
//! move, `&mut Option<T>` forwards `&mut T`, and `&Option<T>` forwards `&T`.
//! A callable that returns a reference produces an optional that aliases the
//! referenced storage instead of copying it. No combinator clones a value on
//! its own; the only clones are those the callables perform, or an explicit
//! [`cloned`] step.
//!
//! ```rust
//! use monadic_ops::{and_then, filter, or_else, resolve, transform};
//!
//! assert_eq!(resolve!(Some(5), transform(|x: i32| x * x)), Some(25));
//! assert_eq!(resolve!(None, transform(|x: i32| x * x)), None);
//! assert_eq!(
//!     resolve!(Some(3), and_then(|x: i32| (x % 2 == 0).then_some(x))),
//!     None
//! );
//! assert_eq!(resolve!(None, or_else(|| 25)), Some(25));
//! assert_eq!(resolve!(Some(25), filter(|x: &i32| *x > 5)), Some(25));
//! assert_eq!(
//!     resolve!(
//!         Some(3),
//!         transform(|x: i32| x + 1),
//!         and_then(|x: i32| Some(x * 2))
//!     ),
//!     Some(8)
//! );
//! ```
//!
//! Borrowed inputs produce borrowed results, which write through to the
//! original storage:
//!
//! ```rust
//! use monadic_ops::{filter, resolve};
//!
//! let mut score = Some(40);
//! if let Some(score) = resolve!(&mut score, filter(|x: &&mut i32| **x > 10)) {
//!     *score += 2;
//! }
//! assert_eq!(score, Some(42));
//! ```

mod and_then;
mod cloned;
mod error;
mod filter;
mod operator;
mod optional;
mod or_else;
mod pipeline;
mod transform;

pub use and_then::{and_then, AndThen};
pub use cloned::{cloned, Cloned};
pub use error::OptionalError;
pub use filter::{filter, Filter};
pub use operator::{combine, Combine, Operator};
pub use optional::Optional;
pub use or_else::{or_else, Fallback, OrElse};
pub use pipeline::{resolve, Pipeline};
pub use transform::{transform, Transform};
