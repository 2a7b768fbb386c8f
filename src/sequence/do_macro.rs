//! do_! macro for do-notation style syntax.
//!
//! This module provides the `do_!` macro, which allows chaining container
//! operations in a more readable, imperative-looking style similar to
//! Haskell's do-notation or Scala's for-comprehension.
//!
//! # Syntax
//!
//! The macro supports the following constructs:
//!
//! - `pattern <= expression;` - Bind: extracts the value from a container
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression (must already be a container)
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Examples
//!
//! ## Maybe
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::do_;
//!
//! let result = do_! {
//!     x <= Maybe::some(5);
//!     y <= Maybe::some(10);
//!     let z = x + y;
//!     Maybe::some(z * 2)
//! };
//! assert_eq!(result, Maybe::some(30));
//! ```
//!
//! ## Result
//!
//! ```rust
//! use monars::container::Result;
//! use monars::do_;
//!
//! fn find_user(id: u32) -> Result<String, String> {
//!     if id == 1 {
//!         Result::success("kat".to_string())
//!     } else {
//!         Result::failure(format!("no user {id}"))
//!     }
//! }
//!
//! fn permission_level(name: &str) -> Result<u8, String> {
//!     if name == "kat" {
//!         Result::success(3)
//!     } else {
//!         Result::failure(format!("{name} has no permissions"))
//!     }
//! }
//!
//! let outcome: Result<u8, String> = do_! {
//!     name <= find_user(1);
//!     level <= permission_level(&name);
//!     Result::success(level + 1)
//! };
//! assert_eq!(outcome, Result::success(4));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.bind(move |pattern| { /* rest */ })
//! ```
//!
//! The expansion calls the inherent `bind` method, so the macro works with
//! both containers without any trait import, and a failure in any bound
//! expression flows through the remaining nested closures without
//! invoking them.

#![forbid(unsafe_code)]

/// A macro for container do-notation style syntax.
///
/// This macro allows you to write chained container computations in a more
/// imperative-looking style, similar to Haskell's do-notation. Each
/// `pattern <= expression;` line binds the value out of a container; the
/// final expression must itself be a container and becomes the overall
/// result. Bound values may have a different type on every line, which is
/// what distinguishes the macro from the homogeneous
/// [`sequence`](crate::sequence::sequence) function.
///
/// # Syntax
///
/// ```text
/// do_! {
///     pattern <= container_expression;    // Bind operation
///     let pattern = expression;           // Pure let binding
///     container_expression                // Final expression (must be a container)
/// }
/// ```
///
/// Identifier, tuple, and wildcard patterns are supported on the left of
/// `<=`. The final expression is mandatory; a `do_!` block cannot end on a
/// bind:
///
/// ```rust,compile_fail
/// use monars::container::Maybe;
/// use monars::do_;
///
/// let result = do_! {
///     x <= Maybe::some(5);
/// };
/// ```
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::do_;
///
/// // Maybe example
/// let result = do_! {
///     x <= Maybe::some(5);
///     y <= Maybe::some(10);
///     Maybe::some(x + y)
/// };
/// assert_eq!(result, Maybe::some(15));
///
/// // Short-circuit on None
/// let result: Maybe<i32> = do_! {
///     x <= Maybe::some(5);
///     y <= Maybe::<i32>::none();
///     Maybe::some(x + y)
/// };
/// assert_eq!(result, Maybe::none());
/// ```
#[macro_export]
macro_rules! do_ {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    // Case 1: Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    // Case 2: Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |$pattern| {
            $crate::do_!($($rest)+)
        })
    };

    // Case 3: Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |($($pattern)*)| {
            $crate::do_!($($rest)+)
        })
    };

    // Case 4: Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |_| {
            $crate::do_!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 5: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::do_!($($rest)+)
        }
    };

    // Case 6: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::do_!($($rest)+)
        }
    };
}
