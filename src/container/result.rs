//! Result type - explicit success or failure of an operation.
//!
//! This module provides the `Result<S, F>` type, which represents the outcome
//! of a fallible operation: `Success(S)` carrying the produced value, or
//! `Failure(F)` carrying an ordinary failure payload. It is useful for:
//!
//! - Validation pipelines where the first failing step decides the outcome
//! - Fallible transforms whose failures carry domain data, not just messages
//! - Keeping the failure path visible in signatures instead of in panics
//!
//! The failure payload is a plain value. Nothing requires it to implement an
//! error trait, so a failure can be a string, an enum of rejection reasons,
//! or the structure that failed inspection.
//!
//! This type deliberately shares its name with `core::result::Result`, the
//! same way `std::io::Result` shadows it within an equally narrow scope.
//! Import it explicitly where both are needed; the standard type stays
//! reachable as `core::result::Result`.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Result;
//!
//! fn parse_age(text: &str) -> Result<u8, String> {
//!     match text.parse::<u8>() {
//!         Ok(age) => Result::success(age),
//!         Err(_) => Result::failure(format!("not an age: {text}")),
//!     }
//! }
//!
//! fn check_adult(age: u8) -> Result<u8, String> {
//!     if age >= 18 {
//!         Result::success(age)
//!     } else {
//!         Result::failure("too young".to_string())
//!     }
//! }
//!
//! let outcome = parse_age("21").bind(check_adult);
//! assert_eq!(outcome, Result::success(21));
//!
//! let outcome = parse_age("12").bind(check_adult);
//! assert_eq!(outcome, Result::failure("too young".to_string()));
//! ```

use core::fmt;

use crate::container::maybe::Maybe;

/// The outcome of a fallible operation.
///
/// `Result<S, F>` has exactly two states: `Success(value)` or
/// `Failure(payload)`. Both payload types are free: `F` carries whatever
/// data describes the failure, and neither side is privileged beyond the
/// direction the combinators flow. Nested containers such as
/// `Result<Result<S, F>, F>` are legal and never flattened implicitly.
///
/// Values are immutable after construction: every combinator consumes its
/// receiver and returns a new value, and a function argument is invoked at
/// most once, only when the relevant variant matches.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `F` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use monars::container::Result;
///
/// let won: Result<i32, String> = Result::success(7);
/// let lost: Result<i32, String> = Result::failure("no dice".to_string());
///
/// assert_eq!(won.value_or(0), 7);
/// assert_eq!(lost.value_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<S, F> {
    /// The success variant, wrapping the produced value.
    Success(S),
    /// The failure variant, wrapping the failure payload.
    Failure(F),
}

impl<S, F> Result<S, F> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Result` in the `Success` state. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a `Result` in the `Failure` state. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(payload: F) -> Self {
        Self::Failure(payload)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(1);
    /// assert!(outcome.is_success());
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, &str> = Result::failure("broken");
    /// assert!(outcome.is_failure());
    /// assert!(!outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// assert_eq!(outcome.success_ref(), Maybe::some(&42));
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.success_ref(), Maybe::none());
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Maybe<&S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Borrows the failure payload, if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    ///
    /// let outcome: Result<i32, &str> = Result::failure("broken");
    /// assert_eq!(outcome.failure_ref(), Maybe::some(&"broken"));
    ///
    /// let outcome: Result<i32, &str> = Result::success(42);
    /// assert_eq!(outcome.failure_ref(), Maybe::none());
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Maybe<&F> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(payload) => Maybe::Some(payload),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies an infallible function to the success value.
    ///
    /// If this is `Success(v)`, returns `Success(function(v))`. If this is
    /// `Failure(payload)`, the payload passes through untouched and
    /// `function` is never invoked.
    ///
    /// `function` must not itself be fallible; a transform that can fail
    /// belongs in [`bind`](Self::bind).
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the success value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(3);
    /// assert_eq!(outcome.map(|n| n * 2), Result::success(6));
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.map(|n| n * 2), Result::failure("broken".to_string()));
    /// ```
    #[inline]
    pub fn map<U, G>(self, function: G) -> Result<U, F>
    where
        G: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(payload) => Result::Failure(payload),
        }
    }

    /// Applies a function to the failure payload.
    ///
    /// If this is `Failure(payload)`, returns `Failure(function(payload))`.
    /// If this is `Success(v)`, the value passes through untouched and
    /// `function` is never invoked. Useful for enriching a failure with
    /// context as it travels outward.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the failure payload
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::failure("timeout".to_string());
    /// let wrapped = outcome.map_failure(|reason| format!("fetch failed: {reason}"));
    /// assert_eq!(wrapped, Result::failure("fetch failed: timeout".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> Result<S, F2>
    where
        G: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(payload) => Result::Failure(function(payload)),
        }
    }

    /// Chains a function that itself returns a `Result`.
    ///
    /// If this is `Success(v)`, returns `function(v)` directly, so a failure
    /// produced inside `function` propagates unchanged. If this is
    /// `Failure(payload)`, the payload passes through and `function` is
    /// never invoked. Chained binds therefore stop at the first failure.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the success value to a new `Result`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// fn half(n: i32) -> Result<i32, String> {
    ///     if n % 2 == 0 {
    ///         Result::success(n / 2)
    ///     } else {
    ///         Result::failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Result::<_, String>::success(8).bind(half).bind(half), Result::success(2));
    /// assert_eq!(
    ///     Result::<_, String>::success(6).bind(half).bind(half),
    ///     Result::failure("3 is odd".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn bind<U, G>(self, function: G) -> Result<U, F>
    where
        G: FnOnce(S) -> Result<U, F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(payload) => Result::Failure(payload),
        }
    }

    /// Recovers from failure with a function producing a new `Result`.
    ///
    /// If this is `Failure(payload)`, returns `function(payload)`, which may
    /// succeed or fail with a different payload type. If this is
    /// `Success(v)`, returns `Success(v)` unchanged and `function` is never
    /// invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the failure payload to a new `Result`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let primary: Result<i32, String> = Result::failure("cache miss".to_string());
    /// let outcome = primary.or_else(|_| Result::<i32, String>::success(42));
    /// assert_eq!(outcome, Result::success(42));
    ///
    /// let primary: Result<i32, String> = Result::success(7);
    /// let outcome = primary.or_else(|_| Result::<i32, String>::success(42));
    /// assert_eq!(outcome, Result::success(7));
    /// ```
    #[inline]
    pub fn or_else<F2, G>(self, function: G) -> Result<S, F2>
    where
        G: FnOnce(F) -> Result<S, F2>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(payload) => function(payload),
        }
    }

    /// Returns the success value, or `default` if this is a `Failure`.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`value_or_else`](Self::value_or_else) when computing it should be
    /// deferred to the failure case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(3);
    /// assert_eq!(outcome.value_or(0), 3);
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    ///
    /// `function` is only invoked in the failure case, receiving the payload
    /// so the fallback can depend on what went wrong.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<usize, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.value_or_else(|reason| reason.len()), 6);
    /// ```
    #[inline]
    pub fn value_or_else<G>(self, function: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(payload) => function(payload),
        }
    }

    /// Eliminates the `Result` by applying one of two functions.
    ///
    /// This is case analysis as a function: both states must be handled, so
    /// the failure path can never be silently ignored. The failure case
    /// comes first.
    ///
    /// # Arguments
    ///
    /// * `on_failure` - Invoked with the payload when this is `Failure`
    /// * `on_success` - Invoked with the value when this is `Success`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(3);
    /// let label = outcome.fold(|reason| format!("failed: {reason}"), |n| format!("got {n}"));
    /// assert_eq!(label, "got 3");
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// let label = outcome.fold(|reason| format!("failed: {reason}"), |n| format!("got {n}"));
    /// assert_eq!(label, "failed: broken");
    /// ```
    ///
    /// A `match` gets the same exhaustiveness from the compiler; leaving out
    /// the `Failure` arm is rejected:
    ///
    /// ```rust,compile_fail
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(3);
    /// let value = match outcome {
    ///     Result::Success(n) => n,
    /// };
    /// ```
    #[inline]
    pub fn fold<U, G, H>(self, on_failure: G, on_success: H) -> U
    where
        G: FnOnce(F) -> U,
        H: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(payload) => on_failure(payload),
        }
    }

    /// Swaps the two sides.
    ///
    /// `Success(v)` becomes `Failure(v)` and `Failure(payload)` becomes
    /// `Success(payload)`. Handy when a pipeline wants to run combinators
    /// against the failure payload for a few steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// assert_eq!(outcome.swap(), Result::failure(42));
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.swap(), Result::success("broken".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Result<F, S> {
        match self {
            Self::Success(value) => Result::Failure(value),
            Self::Failure(payload) => Result::Success(payload),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the `Result`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// assert_eq!(outcome.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Result::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure payload, consuming the `Result`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, &str> = Result::failure("broken");
    /// assert_eq!(outcome.unwrap_failure(), "broken");
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Success(_) => panic!("called `Result::unwrap_failure()` on a `Success` value"),
            Self::Failure(payload) => payload,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the failure payload.
    ///
    /// `Success(v)` becomes `Some(v)`; `Failure(payload)` becomes `None` and
    /// the payload is dropped. This is the step that forgets why an
    /// operation failed, keeping only whether it produced a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Result};
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// assert_eq!(outcome.to_maybe(), Maybe::some(42));
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.to_maybe(), Maybe::none());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }
}

impl<S: Default, F> Result<S, F> {
    /// Returns the success value, or `S::default()` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// assert_eq!(outcome.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => S::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for Result<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(payload) => formatter.debug_tuple("Failure").field(payload).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S, F> From<core::result::Result<S, F>> for Result<S, F> {
    /// Converts a standard library result.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Ok(42).into();
    /// assert_eq!(outcome, Result::success(42));
    /// ```
    #[inline]
    fn from(result: core::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Result<S, F>> for core::result::Result<S, F> {
    /// Converts back into a standard library result.
    ///
    /// `Success(v)` becomes `Ok(v)`, and `Failure(payload)` becomes
    /// `Err(payload)`, so a chain can end in `?` territory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// let std_result: core::result::Result<i32, String> = outcome.into();
    /// assert_eq!(std_result, Ok(42));
    /// ```
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(payload) => Err(payload),
        }
    }
}

// =============================================================================
// Iterator Support
// =============================================================================

impl<S, F> IntoIterator for Result<S, F> {
    type Item = S;
    type IntoIter = core::option::IntoIter<S>;

    /// Iterates over the success value zero or one times.
    ///
    /// A `Failure` yields nothing; its payload is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Result;
    ///
    /// let outcome: Result<i32, String> = Result::success(42);
    /// let collected: Vec<i32> = outcome.into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let outcome: Result<i32, String> = Result::failure("broken".to_string());
    /// let collected: Vec<i32> = outcome.into_iter().collect();
    /// assert!(collected.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self.to_maybe()).into_iter()
    }
}

// =============================================================================
// Auto-Trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Result<i32, &str>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Result<String, String>: Send, Sync);
