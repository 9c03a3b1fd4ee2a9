//! Core outcome type and supporting collections.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let o: Outcome<i32, &str> = Outcome::success(42);
//! assert_eq!(o.map(|n| n + 1), Outcome::success(43));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod iter;
pub mod outcome;

pub use outcome::Outcome;

/// SmallVec-backed collection used when aggregating errors from many outcomes.
///
/// Uses inline storage for one element, so the common single-failure case
/// avoids a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
