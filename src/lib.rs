//! # monars
//!
//! A monadic error-handling library for Rust providing `Maybe` and `Result`
//! containers with short-circuit composition.
//!
//! ## Overview
//!
//! This library represents fallible computations as values instead of null
//! sentinels or exceptions. A chain of fallible steps reads as straight-line
//! code while the first failure short-circuits everything after it and
//! carries a typed error payload to the caller. It includes:
//!
//! - **Containers**: [`Maybe<T>`](container::Maybe) for presence/absence and
//!   [`Result<S, F>`](container::Result) for success/failure with typed
//!   payloads on both sides
//! - **Combinators**: `bind`, `map`, `or_else`, `value_or`, `fold`, and the
//!   explicit `Maybe`↔`Result` conversions
//! - **Type Classes**: `Functor`, `Applicative`, and `Monad` over both
//!   containers, emulated through Generic Associated Types
//! - **Sequencing**: the [`sequence`](sequence::sequence) fold and the
//!   [`do_!`](crate::do_!) do-notation macro for short-circuit composition
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `sequence`: Short-circuit sequencing (the `sequence` function and the
//!   `do_!` macro)
//! - `serde`: `Serialize`/`Deserialize` implementations for both containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monars::container::Result;
//!
//! fn parse_positive(input: &str) -> Result<i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(number) if number > 0 => Result::success(number),
//!         Ok(number) => Result::failure(format!("not positive: {number}")),
//!         Err(_) => Result::failure(format!("not a number: {input}")),
//!     }
//! }
//!
//! let outcome = parse_positive("21")
//!     .bind(|n| Result::success(n * 2))
//!     .map(|n| n.to_string());
//! assert_eq!(outcome, Result::success("42".to_string()));
//!
//! let outcome = parse_positive("-3").map(|n| n * 2);
//! assert_eq!(outcome, Result::failure("not positive: -3".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. Importing the prelude brings
/// this crate's `Result` into scope, shadowing `std::result::Result` the way
/// `io::Result` does when imported; reach the standard type as
/// `core::result::Result` where both are needed.
///
/// # Usage
///
/// ```rust
/// use monars::prelude::*;
///
/// let doubled = Maybe::some(21).map(|n| n * 2);
/// assert_eq!(doubled, Maybe::some(42));
/// ```
pub mod prelude {

    pub use crate::container::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod container;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;
