//! Future wrapper translating panics into failure outcomes.
//!
//! This module provides [`CatchFuture`], which wraps any future and resolves
//! to an [`Outcome`]: the inner future's output on normal completion, or the
//! captured panic payload if polling it unwinds.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::capture::Caught;
use crate::types::Outcome;

pin_project! {
    /// A future that resolves to an [`Outcome`] instead of unwinding.
    ///
    /// Each poll of the inner future runs inside `catch_unwind`; a panic is
    /// converted to `Outcome::Failure` carrying the raw payload. The future
    /// itself therefore always completes normally.
    ///
    /// # Cancel Safety
    ///
    /// `CatchFuture` is cancel-safe if the inner future is cancel-safe; it
    /// adds no state beyond a completion flag.
    ///
    /// # Unwind Safety
    ///
    /// Unwind safety is asserted internally: after a captured panic the
    /// inner future is dropped without ever being polled again, so no
    /// broken invariants can be observed through it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::FutureCatchExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let o = async { "done" }.catch_outcome().await;
    /// assert_eq!(o.into_success(), Some("done"));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<Fut> {
        #[pin]
        future: Fut,
        completed: bool,
    }
}

impl<Fut> CatchFuture<Fut>
where
    Fut: Future,
{
    /// Creates a new `CatchFuture` wrapping the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, completed: false }
    }
}

impl<Fut> Future for CatchFuture<Fut>
where
    Fut: Future,
{
    type Output = Outcome<Fut::Output, Caught>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.completed = true;
                Poll::Ready(Outcome::Success(value))
            }
            Err(payload) => {
                *this.completed = true;
                Poll::Ready(Outcome::Failure(payload))
            }
        }
    }
}

impl<Fut> FusedFuture for CatchFuture<Fut>
where
    Fut: FusedFuture,
{
    fn is_terminated(&self) -> bool {
        // The completed flag also covers termination by captured panic,
        // which the inner future cannot report.
        self.completed || self.future.is_terminated()
    }
}

/// Suspends on `future` and settles with an [`Outcome`], never a panic.
///
/// Fulfilment maps to `Outcome::Success(output)`; an unwind while polling
/// maps to `Outcome::Failure(payload)`. The returned future itself always
/// completes.
///
/// # Arguments
///
/// * `future` - The asynchronous computation to capture
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::try_catch_async;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let o = try_catch_async(async { panic!("boom"); }).await;
/// assert!(o.is_failure());
/// # }
/// ```
#[inline]
pub fn try_catch_async<Fut>(future: Fut) -> CatchFuture<Fut>
where
    Fut: Future,
{
    CatchFuture::new(future)
}

/// Extension trait for wrapping any future in a [`CatchFuture`].
///
/// Mirrors the free-function [`try_catch_async`] for call sites that prefer
/// method-chaining.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::FutureCatchExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let o = async { 21 * 2 }.catch_outcome().await;
/// assert_eq!(o.unwrap_or(0), 42);
/// # }
/// ```
pub trait FutureCatchExt: Future + Sized {
    /// Wraps this future so that it resolves to an [`Outcome`] instead of
    /// unwinding on panic.
    fn catch_outcome(self) -> CatchFuture<Self> {
        CatchFuture::new(self)
    }
}

impl<Fut> FutureCatchExt for Fut where Fut: Future {}
