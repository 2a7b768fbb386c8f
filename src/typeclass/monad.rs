//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! A `Monad` is one of the most powerful abstractions in functional programming,
//! often described as a "programmable semicolon" because it controls how
//! computations are sequenced.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Monad;
//!
//! // Using flat_map to chain Maybe computations
//! let x = Maybe::some(5);
//! let y = x.flat_map(|n| if n > 0 { Maybe::some(n * 2) } else { Maybe::none() });
//! assert_eq!(y, Maybe::some(10));
//!
//! // Chain of computations with potential failure
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     match s.parse::<i32>() {
//!         Ok(n) if n > 0 => Maybe::some(n),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;
use crate::container::{Maybe, Result};

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next. On the
/// crate's containers, `flat_map` agrees with the inherent `bind` method.
///
/// # Laws
///
/// ## Left Identity Law
///
/// Applying `pure` then `flat_map` with a function equals applying the function directly:
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// Binding with `pure` returns the original monad:
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// Binding operations can be reassociated:
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::typeclass::Monad;
///
/// let x = Maybe::some(5);
/// let y = x.flat_map(|n| Maybe::some(n * 2));
/// assert_eq!(y, Maybe::some(10));
///
/// // Chaining with potential failure
/// let z = Maybe::some(10).flat_map(|n| {
///     if n > 0 {
///         Maybe::some(n / 2)
///     } else {
///         Maybe::none()
///     }
/// });
/// assert_eq!(z, Maybe::some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class. It takes a
    /// function that returns a new monad and "flattens" the nested result.
    ///
    /// In Haskell, this is `>>=` (bind). In Rust's standard library, this is
    /// similar to `and_then` on `Option` and `Result`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Monad;
    ///
    /// let x = Maybe::some(5);
    /// let y = x.flat_map(|n| Maybe::some(n * 2));
    /// assert_eq!(y, Maybe::some(10));
    ///
    /// let z = Maybe::some(5);
    /// let w = z.flat_map(|n| if n > 10 { Maybe::some(n) } else { Maybe::none() });
    /// assert_eq!(w, Maybe::none());
    /// ```
    fn flat_map<B, G>(self, function: G) -> Self::WithType<B>
    where
        G: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// This method is provided for familiarity with Rust's `Option::and_then`
    /// and `Result::and_then` methods.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Monad;
    ///
    /// let x = Maybe::some(5);
    /// let y = x.and_then(|n| Maybe::some(n * 2));
    /// assert_eq!(y, Maybe::some(10));
    /// ```
    #[inline]
    fn and_then<B, G>(self, function: G) -> Self::WithType<B>
    where
        Self: Sized,
        G: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// This evaluates `self`, ignores its value, and returns `next`.
    /// In Haskell, this is the `>>` operator.
    ///
    /// Note: If `self` represents a failure (e.g., `None` or `Failure`),
    /// the failure propagates and `next` is not returned.
    ///
    /// # Arguments
    ///
    /// * `next` - The monad to return after evaluating `self`
    ///
    /// # Returns
    ///
    /// The `next` monad if `self` succeeds, otherwise propagates failure
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Monad;
    ///
    /// let x = Maybe::some(5);
    /// let y = x.then(Maybe::some("hello"));
    /// assert_eq!(y, Maybe::some("hello"));
    ///
    /// let z: Maybe<i32> = Maybe::none();
    /// let w = z.then(Maybe::some("hello"));
    /// assert_eq!(w, Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, G>(self, function: G) -> Maybe<B>
    where
        G: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Result<S, F> Implementation
// =============================================================================

impl<S, F: Clone> Monad for Result<S, F> {
    #[inline]
    fn flat_map<B, G>(self, function: G) -> Result<B, F>
    where
        G: FnOnce(S) -> Result<B, F>,
    {
        self.bind(function)
    }
}
