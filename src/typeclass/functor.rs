//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! A `Functor` is one of the fundamental abstractions in functional programming,
//! allowing you to transform the contents of a container without changing its shape.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Functor;
//!
//! // Maybe as a Functor
//! let some_value: Maybe<i32> = Maybe::some(5);
//! let transformed: Maybe<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! // None is preserved
//! let none_value: Maybe<i32> = Maybe::none();
//! let transformed: Maybe<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::none());
//! ```

use super::higher::TypeConstructor;
use crate::container::{Maybe, Result};

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value inside
/// a container while preserving the container's structure. On the crate's
/// containers, `fmap` agrees with the inherent `map` method; the trait form
/// exists for code that stays generic over the container.
///
/// # Laws
///
/// ## Identity Law
///
/// Mapping the identity function returns an equivalent functor:
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// Mapping composed functions is equivalent to mapping them in sequence:
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::typeclass::Functor;
///
/// let x: Maybe<i32> = Maybe::some(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// This is the primary operation of the Functor type class. It takes a
    /// function that transforms the inner type and returns a new functor
    /// with the transformed value.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// let y: Maybe<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Maybe::some(10));
    /// ```
    fn fmap<B, G>(self, function: G) -> Self::WithType<B>
    where
        G: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// This method is useful when you want to transform the functor's
    /// contents without consuming it.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes a reference to the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Functor;
    ///
    /// let x: Maybe<String> = Maybe::some("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, G>(&self, function: G) -> Self::WithType<B>
    where
        G: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to place inside the functor
    ///
    /// # Returns
    ///
    /// A new functor containing the given value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// assert_eq!(x.replace("replaced"), Maybe::some("replaced"));
    ///
    /// let y: Maybe<i32> = Maybe::none();
    /// assert_eq!(y.replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, G>(self, function: G) -> Maybe<B>
    where
        G: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, G>(&self, function: G) -> Maybe<B>
    where
        G: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<S, F> Implementation
// =============================================================================

/// `fmap_ref` rebuilds the failure side, so the payload must be `Clone`.
impl<S, F: Clone> Functor for Result<S, F> {
    #[inline]
    fn fmap<B, G>(self, function: G) -> Result<B, F>
    where
        G: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, G>(&self, function: G) -> Result<B, F>
    where
        G: FnOnce(&S) -> B,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(payload) => Result::Failure(payload.clone()),
        }
    }
}
