//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`] (with its variants in scope), [`ErrorVec`]
//! - **Traits**: [`IntoOutcome`]
//! - **Functions**: [`combine_all`], [`collect_errors`], [`partition`], and
//!   (with the `std` feature) [`try_catch`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, u32> {
//!     match id {
//!         1 => Success("alice"),
//!         _ => Failure(id),
//!     }
//! }
//!
//! let names = combine_all([lookup(1), lookup(1)]);
//! assert_eq!(names, Success(vec!["alice", "alice"]));
//! ```

pub use crate::convert::IntoOutcome;
pub use crate::ops::{collect_errors, combine_all, partition};
pub use crate::types::{ErrorVec, Outcome};

pub use crate::types::Outcome::{Failure, Success};

#[cfg(feature = "std")]
pub use crate::capture::{panic_message, try_catch, Caught};

#[cfg(feature = "async")]
pub use crate::async_ext::{try_catch_async, FutureCatchExt};
