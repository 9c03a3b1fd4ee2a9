//! Failure as a value: a two-variant [`Outcome`] type plus combinators for
//! constructing, chaining, and aggregating success/failure values, so error
//! paths are checked by the compiler instead of interrupting control flow.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn reciprocal(n: f64) -> Outcome<f64, &'static str> {
//!     if n == 0.0 {
//!         Outcome::failure("division by zero")
//!     } else {
//!         Outcome::success(1.0 / n)
//!     }
//! }
//!
//! let o = reciprocal(4.0).map(|x| x * 100.0);
//! assert_eq!(o.unwrap_or(0.0), 25.0);
//!
//! // Failures pass through every later step untouched.
//! let o = reciprocal(0.0).map(|x| x * 100.0);
//! assert_eq!(o, Outcome::failure("division by zero"));
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use outcome_rail::ops::partition;
//! use outcome_rail::Outcome;
//!
//! let batch = vec![
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::failure("bad record"),
//!     Outcome::success(3),
//! ];
//! let (successes, failures) = partition(batch);
//! assert_eq!(successes, vec![1, 3]);
//! assert_eq!(failures.as_slice(), ["bad record"]);
//! ```
//!
//! ## Capturing panics at a boundary
//!
//! ```
//! use outcome_rail::capture::try_catch;
//!
//! let o = try_catch(|| "config".len());
//! assert_eq!(o.into_success(), Some(6));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome and the standard Result
pub mod convert;
/// Free functions over one or many outcomes, including aggregation
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The Outcome type and supporting collections
pub mod types;

/// Panic capture as outcome values (requires `std` feature)
#[cfg(feature = "std")]
pub mod capture;

/// Async panic capture (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use convert::IntoOutcome;
pub use types::{ErrorVec, Outcome};
