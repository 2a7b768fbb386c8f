//! Type class traits for the combinator layer.
//!
//! This module provides the generic face of the combinator set, as a small
//! tower of traits implemented by both containers:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GAT
//! - [`Functor`]: Mapping over the interesting value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to abstract over
//! [`Maybe`](crate::container::Maybe) and
//! [`Result`](crate::container::Result) with a single definition.
//!
//! Every trait method on the containers agrees with the inherent method of
//! the same role: `fmap` is [`map`](crate::container::Maybe::map) and
//! `flat_map` is [`bind`](crate::container::Maybe::bind). The traits exist
//! for code that wants to stay generic over which container it runs in.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::{Maybe, Result};
//! use monars::typeclass::Monad;
//!
//! // One generic function, two containers
//! fn double_inside<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     value.flat_map(|n| M::pure(n * 2))
//! }
//!
//! assert_eq!(double_inside(Maybe::some(21)), Maybe::some(42));
//!
//! let outcome: Result<i32, String> = Result::success(21);
//! assert_eq!(double_inside(outcome), Result::success(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
