//! Short-circuit composition of fallible steps.
//!
//! This module provides two forms of sequencing for computations built on
//! [`Result`]:
//!
//! - [`sequence`]: runs an ordered, homogeneous list of steps, feeding each
//!   step's success value to the next and stopping at the first failure.
//! - [`do_!`](crate::do_!): do-notation sugar over `bind` for heterogeneous
//!   pipelines, where each bound value may have a different type.
//!
//! Both forms are plain data flow over [`bind`](Result::bind): no panic,
//! unwind, or non-local jump is involved, so the short-circuit can never
//! escape the expression it occurs in.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Result;
//! use monars::sequence::sequence;
//!
//! fn check_positive(n: i32) -> Result<i32, String> {
//!     if n > 0 {
//!         Result::success(n)
//!     } else {
//!         Result::failure("not positive".to_string())
//!     }
//! }
//!
//! fn double(n: i32) -> Result<i32, String> {
//!     Result::success(n * 2)
//! }
//!
//! fn add_one(n: i32) -> Result<i32, String> {
//!     Result::success(n + 1)
//! }
//!
//! let steps: Vec<fn(i32) -> Result<i32, String>> = vec![check_positive, double, add_one];
//! assert_eq!(sequence(5, steps), Result::success(11));
//!
//! let steps: Vec<fn(i32) -> Result<i32, String>> = vec![check_positive, double, add_one];
//! assert_eq!(sequence(-1, steps), Result::failure("not positive".to_string()));
//! ```

mod do_macro;

use crate::container::Result;

/// Runs an ordered list of fallible steps, stopping at the first failure.
///
/// The accumulator starts as `Success(initial)` and each step is applied
/// with [`bind`](Result::bind), strictly in list order. A step only runs
/// when everything before it succeeded; once a step fails, its payload
/// passes through the rest of the fold untouched and no later step is
/// invoked. The sequencer itself never fails: any `Failure` in the output
/// was produced by a step.
///
/// With zero steps the result is vacuously `Success(initial)`.
///
/// Steps are any `FnOnce(S) -> Result<S, F>`, so plain function pointers,
/// closures, and boxed closures all work. For pipelines whose intermediate
/// values change type from step to step, use [`do_!`](crate::do_!) or chain
/// [`bind`](Result::bind) directly.
///
/// # Arguments
///
/// * `initial` - The input fed to the first step
/// * `steps` - The steps to run, in order
///
/// # Returns
///
/// The last step's success value, or the first failure encountered
///
/// # Examples
///
/// ```rust
/// use monars::container::Result;
/// use monars::sequence::sequence;
///
/// fn parse(text: String) -> Result<String, String> {
///     text.parse::<i32>()
///         .map(|n| n.to_string())
///         .map_err(|_| "not a number".to_string())
///         .into()
/// }
///
/// let outcome = sequence("42".to_string(), vec![parse]);
/// assert_eq!(outcome, Result::success("42".to_string()));
/// ```
///
/// Boxed closures allow mixing captures in one list:
///
/// ```rust
/// use monars::container::Result;
/// use monars::sequence::sequence;
///
/// let minimum = 10;
/// let steps: Vec<Box<dyn FnOnce(i32) -> Result<i32, String>>> = vec![
///     Box::new(move |n| {
///         if n >= minimum {
///             Result::success(n)
///         } else {
///             Result::failure(format!("{n} is below {minimum}"))
///         }
///     }),
///     Box::new(|n| Result::success(n * 2)),
/// ];
///
/// assert_eq!(sequence(12, steps), Result::success(24));
/// ```
pub fn sequence<S, F, I>(initial: S, steps: I) -> Result<S, F>
where
    I: IntoIterator,
    I::Item: FnOnce(S) -> Result<S, F>,
{
    steps
        .into_iter()
        .fold(Result::Success(initial), |accumulated, step| {
            accumulated.bind(step)
        })
}
