//! Data-first free functions over one or many [`Outcome`] values.
//!
//! Every single-value function here delegates to the corresponding method on
//! [`Outcome`]; they exist for call sites that prefer a non-method style or
//! want to pass an operation by name. The aggregation functions
//! ([`combine_all`], [`collect_errors`], [`partition`]) are pure collection
//! algorithms over sequences of outcomes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ops;
//! use outcome_rail::Outcome;
//!
//! let outcomes = vec![
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::success(2),
//!     Outcome::success(3),
//! ];
//! assert_eq!(ops::combine_all(outcomes), Outcome::success(vec![1, 2, 3]));
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, Outcome};

/// Maps the success payload; delegates to [`Outcome::map`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let o = Outcome::<i32, &str>::success(21);
/// assert_eq!(ops::map(o, |n| n * 2), Outcome::success(42));
/// ```
#[must_use]
#[inline]
pub fn map<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// Maps the error; delegates to [`Outcome::map_err`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let o = Outcome::<i32, i32>::failure(7);
/// assert_eq!(ops::map_err(o, |e| e + 1), Outcome::failure(8));
/// ```
#[must_use]
#[inline]
pub fn map_err<T, E, G, F>(outcome: Outcome<T, E>, f: F) -> Outcome<T, G>
where
    F: FnOnce(E) -> G,
{
    outcome.map_err(f)
}

/// Chains an outcome-producing step; delegates to [`Outcome::and_then`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let o = Outcome::<i32, &str>::success(4);
/// let halved = ops::and_then(o, |n| {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure("odd")
///     }
/// });
/// assert_eq!(halved, Outcome::success(2));
/// ```
#[must_use]
#[inline]
pub fn and_then<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.and_then(f)
}

/// Returns the payload or a default; delegates to [`Outcome::unwrap_or`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// assert_eq!(ops::unwrap_or(Outcome::<i32, &str>::failure("e"), 0), 0);
/// ```
#[inline]
pub fn unwrap_or<T, E>(outcome: Outcome<T, E>, default: T) -> T {
    outcome.unwrap_or(default)
}

/// Returns the payload, panicking on failure; delegates to
/// [`Outcome::unwrap`].
///
/// # Panics
///
/// Panics if the outcome is a failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// assert_eq!(ops::unwrap(Outcome::<i32, &str>::success(5)), 5);
/// ```
#[inline]
#[track_caller]
pub fn unwrap<T, E>(outcome: Outcome<T, E>) -> T
where
    E: core::fmt::Debug,
{
    outcome.unwrap()
}

/// Returns the payload, panicking with `msg` on failure; delegates to
/// [`Outcome::expect`].
///
/// # Panics
///
/// Panics if the outcome is a failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// assert_eq!(ops::expect(Outcome::<i32, &str>::success(5), "want five"), 5);
/// ```
#[inline]
#[track_caller]
pub fn expect<T, E>(outcome: Outcome<T, E>, msg: &str) -> T
where
    E: core::fmt::Debug,
{
    outcome.expect(msg)
}

/// Returns `true` if the outcome is a success.
#[must_use]
#[inline]
pub fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Returns `true` if the outcome is a failure.
#[must_use]
#[inline]
pub fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

/// Collects a sequence of outcomes into one outcome of all payloads.
///
/// Iterates in order and returns the first failure's error unmodified,
/// consuming no further elements from the source. If every element is a
/// success, returns the payloads in their original order. An empty input
/// yields a success holding an empty vector.
///
/// The same behavior is available through `collect()` via the
/// [`FromIterator`] impl on [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let all_good = vec![
///     Outcome::<i32, &str>::success(1),
///     Outcome::success(2),
/// ];
/// assert_eq!(ops::combine_all(all_good), Outcome::success(vec![1, 2]));
///
/// let mixed = vec![
///     Outcome::success(1),
///     Outcome::failure("e1"),
///     Outcome::success(3),
///     Outcome::failure("e2"),
/// ];
/// assert_eq!(ops::combine_all(mixed), Outcome::failure("e1"));
/// ```
#[must_use]
pub fn combine_all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Collects every failure's error, in original relative order.
///
/// Traverses the entire sequence; success entries contribute nothing. The
/// result is empty when no element failed.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let outcomes = vec![
///     Outcome::<i32, &str>::success(1),
///     Outcome::failure("a"),
///     Outcome::success(2),
/// ];
/// let errors = ops::collect_errors(outcomes);
/// assert_eq!(errors.as_slice(), ["a"]);
/// ```
#[must_use]
pub fn collect_errors<T, E, I>(outcomes: I) -> ErrorVec<E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .filter_map(Outcome::into_failure)
        .collect()
}

/// Splits a sequence of outcomes into payloads and errors in one pass.
///
/// Both sides preserve the original relative order, and their lengths always
/// sum to the input length.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let outcomes = vec![
///     Outcome::<i32, &str>::success(1),
///     Outcome::failure("a"),
///     Outcome::success(3),
///     Outcome::failure("b"),
/// ];
/// let (successes, failures) = ops::partition(outcomes);
/// assert_eq!(successes, vec![1, 3]);
/// assert_eq!(failures.as_slice(), ["a", "b"]);
/// ```
#[must_use]
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut successes = Vec::new();
    let mut failures = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(error) => failures.push(error),
        }
    }
    (successes, failures)
}

/// Short-circuiting collect, mirroring the [`FromIterator`] impl on
/// [`Result`] in std.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let collected: Outcome<Vec<i32>, &str> = (1..=3)
///     .map(Outcome::<i32, &str>::success)
///     .collect();
/// assert_eq!(collected, Outcome::success(vec![1, 2, 3]));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut first_failure = None;
        let collected: V = iter
            .into_iter()
            .scan(&mut first_failure, |failure, outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    // Ends the scan, so nothing past the failure is pulled
                    // from the source iterator.
                    **failure = Some(error);
                    None
                }
            })
            .collect();
        match first_failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
