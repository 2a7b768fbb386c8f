//! Container types for fallible computations.
//!
//! This module provides the two algebraic containers the rest of the crate
//! builds on:
//!
//! - [`Maybe`]: optional presence of a value (`Some`/`None`)
//! - [`Result`]: success-or-failure with typed payloads (`Success`/`Failure`)
//!
//! Both are plain tagged enums: exactly one variant is populated, values are
//! immutable after construction, and every combinator consumes its receiver
//! and returns a fresh value. Conversions between the two are explicit and
//! named (`Maybe::to_result` supplies a failure payload for the absent case;
//! `Result::to_maybe` discards the failure payload); nothing converts
//! implicitly and nothing flattens nested containers.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```rust
//! use monars::container::Result;
//!
//! fn half(n: i32) -> Result<i32, String> {
//!     if n % 2 == 0 {
//!         Result::success(n / 2)
//!     } else {
//!         Result::failure(format!("{n} is odd"))
//!     }
//! }
//!
//! let outcome = Result::success(20).bind(half).bind(half);
//! assert_eq!(outcome, Result::success(5));
//!
//! let outcome = Result::success(20).bind(half).bind(half).bind(half);
//! assert_eq!(outcome, Result::failure("5 is odd".to_string()));
//! ```
//!
//! ## Presence without null
//!
//! ```rust
//! use monars::container::Maybe;
//!
//! let nickname: Maybe<&str> = Maybe::some("kat");
//! assert_eq!(nickname.map(str::len).value_or(0), 3);
//!
//! let missing: Maybe<&str> = Maybe::none();
//! assert_eq!(missing.map(str::len).value_or(0), 0);
//! ```

mod maybe;
mod result;

pub use maybe::Maybe;
pub use result::Result;
