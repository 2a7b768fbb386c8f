//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine two applicative values using a function (`map2`)
//! - Create tuples of applicative values (`product`)
//! - Apply a contained function to a contained value (`apply`)
//!
//! `Applicative` is more powerful than `Functor` because it allows combining
//! multiple independent computations within the same context.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Applying the identity function wrapped in `pure` should return the original value:
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! Applying a pure function to a pure value equals pure of the function applied to the value:
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Applicative;
//!
//! // Lifting a pure value into Maybe context
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! // Combining two Maybe values
//! let a = Maybe::some(1);
//! let b = Maybe::some(2);
//! let c = a.map2(b, |x, y| x + y);
//! assert_eq!(c, Maybe::some(3));
//!
//! // Creating a tuple of values
//! let x = Maybe::some(1);
//! let y = Maybe::some("hello");
//! assert_eq!(x.product(y), Maybe::some((1, "hello")));
//! ```

use super::functor::Functor;
use crate::container::{Maybe, Result};

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with the ability to:
///
/// - Lift any value into the context using `pure`
/// - Combine two values in the context using `map2`
///
/// For `Result`, combining runs left to right: when both arguments are
/// failures, the receiver's payload wins.
///
/// # Laws
///
/// ## Identity Law
///
/// Applying identity through pure returns the original value:
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// Pure preserves function application:
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::typeclass::Applicative;
///
/// // Pure lifts a value into the context
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Maybe::some(42));
///
/// // map2 combines two values
/// let a = Maybe::some(3);
/// let b = Maybe::some(4);
/// let sum = a.map2(b, |x, y| x + y);
/// assert_eq!(sum, Maybe::some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the fundamental operation that allows creating an applicative
    /// value from any regular value. For `Maybe` it produces `Some`; for
    /// `Result` it produces `Success`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift into the context
    ///
    /// # Returns
    ///
    /// The value wrapped in the applicative context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    /// use monars::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::some(42));
    ///
    /// let y: Result<String, u8> = <Result<(), u8>>::pure("hello".to_string());
    /// assert_eq!(y, Result::success("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// This is the primary way to combine two independent computations
    /// within an applicative context. If either computation fails (in the
    /// sense appropriate to the specific applicative), the result fails.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Returns
    ///
    /// An applicative containing the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let a = Maybe::some(1);
    /// let b = Maybe::some(2);
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, Maybe::some(3));
    ///
    /// let a = Maybe::some(1);
    /// let b: Maybe<i32> = Maybe::none();
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, Maybe::none());
    /// ```
    fn map2<B, C, G>(self, other: Self::WithType<B>, function: G) -> Self::WithType<C>
    where
        G: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    ///
    /// # Returns
    ///
    /// An applicative containing a tuple of both values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let a = Maybe::some(1);
    /// let b = Maybe::some("hello");
    /// assert_eq!(a.product(b), Maybe::some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It
    /// applies the contained function to the value in `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - An applicative containing the value to apply the function to
    ///
    /// # Returns
    ///
    /// An applicative containing the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// let value = Maybe::some(5);
    /// let result = function.apply(value);
    /// assert_eq!(result, Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, G>(self, other: Maybe<B>, function: G) -> Maybe<C>
    where
        G: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Some(function), Maybe::Some(value)) => Maybe::Some(function(value)),
            _ => Maybe::None,
        }
    }
}

// =============================================================================
// Result<S, F> Implementation
// =============================================================================

impl<S, F: Clone> Applicative for Result<S, F> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, F> {
        Result::Success(value)
    }

    #[inline]
    fn map2<B, C, G>(self, other: Result<B, F>, function: G) -> Result<C, F>
    where
        G: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Result::Success(b)) => Result::Success(function(a, b)),
            (Self::Failure(payload), _) => Result::Failure(payload),
            (_, Result::Failure(payload)) => Result::Failure(payload),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, F>) -> Result<Output, F>
    where
        S: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Success(function), Result::Success(value)) => {
                Result::Success(function(value))
            }
            (Self::Failure(payload), _) => Result::Failure(payload),
            (_, Result::Failure(payload)) => Result::Failure(payload),
        }
    }
}
