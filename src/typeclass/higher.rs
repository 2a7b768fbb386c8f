//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! type class traits like Functor, Applicative, and Monad.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we cannot
//! write a trait that abstracts over `Maybe<_>` and `Result<_, F>` as type
//! constructors. This module uses GAT to work around this limitation.
//!
//! # Example
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::TypeConstructor;
//!
//! // Maybe implements TypeConstructor
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Maybe<i32> = Maybe::some(42);
//! let none_string: Maybe<String> = transform_type(some_int);
//! assert_eq!(none_string, Maybe::none());
//! ```

use crate::container::{Maybe, Result};

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over the crate's containers, `Maybe<_>` and
/// `Result<_, F>`, as type constructors.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `M: TypeConstructor`:
///
/// 1. **Consistency**: `<M as TypeConstructor>::WithType<M::Inner>` should be
///    equivalent to `M` (up to type equality).
///
/// # Example
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::typeclass::TypeConstructor;
///
/// // Maybe<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be
    /// `Maybe<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

/// The interesting side of `Result` is the success value; the failure type
/// rides along unchanged, the way `Result<_, F>` is one type constructor
/// per choice of `F`.
impl<S, F> TypeConstructor for Result<S, F> {
    type Inner = S;
    type WithType<B> = Result<B, F>;
}
