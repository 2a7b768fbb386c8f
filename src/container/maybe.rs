//! Maybe type - optional presence of a value.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either present (`Some`) or absent (`None`). It replaces null sentinels
//! in code that wants absence to be a first-class, type-checked state:
//!
//! - Lookups that may find nothing
//! - Optional fields that should never be dereferenced blindly
//! - The success side of a [`Result`] once the failure payload is no longer
//!   interesting (see [`Result::to_maybe`])
//!
//! A transform applied with [`map`](Maybe::map) must be infallible; a
//! fallible transform belongs in [`Result::bind`] after converting with
//! [`to_result`](Maybe::to_result).
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::some(42);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! // Pattern matching
//! match present {
//!     Maybe::Some(n) => println!("Got value: {}", n),
//!     Maybe::None => println!("Got nothing"),
//! }
//!
//! // Combinators short-circuit on absence
//! let result = absent.map(|n| n + 1).value_or(0);
//! assert_eq!(result, 0);
//! ```

use core::fmt;

use crate::container::result::Result;

/// A value that is either present or absent.
///
/// `Maybe<T>` has exactly two states: `Some(value)` or `None`. The payload
/// type `T` may be any type, including another container — `Maybe<Maybe<T>>`
/// is legal and no operation flattens it implicitly.
///
/// Values are immutable after construction: every combinator consumes its
/// receiver and returns a new value, and a function argument is invoked at
/// most once, only when the relevant variant matches.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
///
/// let nickname: Maybe<String> = Maybe::some("kat".to_string());
/// let length = nickname.map(|name| name.len());
/// assert_eq!(length, Maybe::some(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The present variant, wrapping a value.
    Some(T),
    /// The absent variant.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` in the `Some` state. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value = Maybe::some(42);
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates a `Maybe` in the `None` state. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::none();
    /// assert!(value.is_absent());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert!(Maybe::some(1).is_present());
    /// assert!(!Maybe::<i32>::none().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_absent());
    /// assert!(!Maybe::some(1).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns a `Maybe` borrowing the wrapped value.
    ///
    /// Useful for running borrowing combinator chains without consuming the
    /// original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let name: Maybe<String> = Maybe::some("kat".to_string());
    /// let length = name.as_ref().map(|n| n.len());
    /// assert_eq!(length, Maybe::some(3));
    /// // name is still available here
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies an infallible function to the wrapped value.
    ///
    /// If this is `Some(v)`, returns `Some(function(v))`. If this is `None`,
    /// returns `None` and `function` is never invoked.
    ///
    /// `function` must not itself be fallible; a transform that can fail
    /// belongs in [`Result::bind`].
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the wrapped value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).map(|n| n + 1), Maybe::some(4));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n + 1), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a function that itself returns a `Maybe`.
    ///
    /// If this is `Some(v)`, returns `function(v)` directly, so an absence
    /// produced inside `function` propagates unchanged. If this is `None`,
    /// returns `None` and `function` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the wrapped value to a new `Maybe`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// fn first_char(text: &str) -> Maybe<char> {
    ///     match text.chars().next() {
    ///         Some(c) => Maybe::some(c),
    ///         None => Maybe::none(),
    ///     }
    /// }
    ///
    /// assert_eq!(Maybe::some("kat").bind(first_char), Maybe::some('k'));
    /// assert_eq!(Maybe::some("").bind(first_char), Maybe::none());
    /// assert_eq!(Maybe::<&str>::none().bind(first_char), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Recovers from absence with a function producing a new `Maybe`.
    ///
    /// If this is `None`, returns `function()`. If this is `Some(v)`,
    /// returns `Some(v)` unchanged and `function` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function producing the fallback `Maybe`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let cached: Maybe<i32> = Maybe::none();
    /// let value = cached.or_else(|| Maybe::some(42));
    /// assert_eq!(value, Maybe::some(42));
    ///
    /// let cached = Maybe::some(7);
    /// let value = cached.or_else(|| Maybe::some(42));
    /// assert_eq!(value, Maybe::some(7));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Returns the wrapped value, or `default` if absent.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`value_or_else`](Self::value_or_else) when computing it should be
    /// deferred to the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).value_or(0), 3);
    /// assert_eq!(Maybe::none().value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the wrapped value, or the result of `function` if absent.
    ///
    /// `function` is only invoked in the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).value_or_else(|| 0), 3);
    /// assert_eq!(Maybe::<i32>::none().value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// This is case analysis as a function: both states must be handled, so
    /// absence can never be silently ignored. The absent case comes first,
    /// mirroring [`Result::fold`]'s failure-first order.
    ///
    /// # Arguments
    ///
    /// * `on_absent` - Invoked when this is `None`
    /// * `on_present` - Invoked with the wrapped value when this is `Some`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let label = Maybe::some(3).fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(label, "3");
    ///
    /// let label = Maybe::<i32>::none().fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(label, "nothing");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_present(value),
            Self::None => on_absent(),
        }
    }

    // =========================================================================
    // Unwrap Operation
    // =========================================================================

    /// Returns the wrapped value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Result`], supplying the failure payload for `None`.
    ///
    /// `Some(v)` becomes `Success(v)`; `None` becomes `Failure(error)`. The
    /// error is evaluated eagerly; use
    /// [`to_result_with`](Self::to_result_with) to defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    ///
    /// let found: Maybe<i32> = Maybe::some(7);
    /// assert_eq!(found.to_result("missing"), Result::success(7));
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(missing.to_result("missing"), Result::failure("missing"));
    /// ```
    #[inline]
    pub fn to_result<F>(self, error: F) -> Result<T, F> {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(error),
        }
    }

    /// Converts into a [`Result`], computing the failure payload for `None`.
    ///
    /// `function` is only invoked in the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// let outcome = missing.to_result_with(|| "missing".to_string());
    /// assert_eq!(outcome, Result::failure("missing".to_string()));
    /// ```
    #[inline]
    pub fn to_result_with<F, G>(self, function: G) -> Result<T, F>
    where
        G: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(function()),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `None`, the natural empty state.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(v)` becomes `Maybe::Some(v)`, and `None` becomes `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::some(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert_eq!(absent, Maybe::none());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Maybe::Some(v)` becomes `Some(v)`, and `Maybe::None` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let option: Option<i32> = Maybe::some(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

// =============================================================================
// Iterator Support
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Iterates over the wrapped value zero or one times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::some(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let collected: Vec<i32> = Maybe::none().into_iter().collect();
    /// assert!(collected.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

// =============================================================================
// Auto-Trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
