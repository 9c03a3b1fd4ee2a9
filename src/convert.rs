//! Conversion helpers between [`Outcome`] and the standard [`Result`].
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the results of existing fallible functions with
//! [`result_to_outcome`] or [`IntoOutcome::into_outcome`], and hand outcomes
//! back to `Result`-speaking APIs with [`outcome_to_result`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.map(|n| n + 1).into_success(), Some(43));
//! ```

use crate::types::Outcome;

/// Converts an `Outcome` to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(payload)` if the outcome is a success
/// * `Err(error)` if the outcome is a failure
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(1)), Ok(1));
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("e")), Err("e"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.to_result()
}

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if the result is `Ok`
/// * `Outcome::Failure(error)` if the result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let r: Result<i32, &str> = Err("failed");
/// assert_eq!(result_to_outcome(r), Outcome::failure("failed"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_result()
    }
}

/// Extension trait adding [`into_outcome`](IntoOutcome::into_outcome) to
/// `Result`.
///
/// This is the ergonomic entry point for code that already returns `Result`
/// and wants to continue in outcome style without a free-function call in the
/// middle of a method chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::IntoOutcome;
///
/// let doubled = "21"
///     .parse::<i32>()
///     .into_outcome()
///     .map(|n| n * 2)
///     .unwrap_or(0);
/// assert_eq!(doubled, 42);
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
