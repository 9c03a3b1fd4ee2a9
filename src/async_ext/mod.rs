//! Async panic capture for outcome-rail.
//!
//! Mirrors [`crate::capture`] for asynchronous computations: the wrapped
//! future always completes with an [`Outcome`](crate::Outcome) — a panic
//! inside it becomes a failure value instead of propagating through the
//! executor.
//!
//! No ordering, cancellation, or timeout semantics are added here; those
//! remain properties of the wrapped future and the caller's runtime.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::async_ext::try_catch_async;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let o = try_catch_async(async { 2 + 2 }).await;
//! assert_eq!(o.into_success(), Some(4));
//! # }
//! ```

pub mod catch_future;

pub use catch_future::{try_catch_async, CatchFuture, FutureCatchExt};
