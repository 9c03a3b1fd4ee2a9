//! Capturing panics from fallible computations as [`Outcome`] values.
//!
//! [`try_catch`] is the one place an ambient panic is translated into a
//! failure value; from there on the failure travels as data. The captured
//! payload is deliberately opaque ([`Caught`]) — narrowing it to a domain
//! error type is the caller's job, typically via
//! [`map_err`](Outcome::map_err) with [`panic_message`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::capture::{panic_message, try_catch};
//!
//! let o = try_catch(|| "fine");
//! assert_eq!(o.into_success(), Some("fine"));
//!
//! let o = try_catch(|| -> i32 { panic!("boom") });
//! let msg = o.map_err(|caught| panic_message(&caught).to_string());
//! assert_eq!(msg.into_failure().as_deref(), Some("boom"));
//! ```

use std::any::Any;
use std::panic::{catch_unwind, UnwindSafe};

use crate::types::Outcome;

/// The opaque payload of a captured panic.
///
/// This is exactly what [`std::panic::catch_unwind`] yields; no richer type
/// hierarchy is imposed on it. Use [`panic_message`] for a best-effort
/// human-readable rendering, or downcast it yourself when the panicking code
/// is known to use a typed payload.
pub type Caught = Box<dyn Any + Send + 'static>;

/// Runs `thunk`, capturing a normal return as a success and a panic as a
/// failure.
///
/// The panic never propagates past this boundary. The returned failure
/// carries the raw panic payload; it is not stringified here so that typed
/// payloads survive intact.
///
/// Note that [`catch_unwind`] only catches unwinding panics; with
/// `panic = "abort"` there is nothing to capture.
///
/// # Arguments
///
/// * `thunk` - The fallible computation to run
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::try_catch;
///
/// let o = try_catch(|| 5);
/// assert_eq!(o.into_success(), Some(5));
///
/// let o = try_catch(|| -> i32 { panic!("boom") });
/// assert!(o.is_failure());
/// ```
pub fn try_catch<T, F>(thunk: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match catch_unwind(thunk) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(payload),
    }
}

/// Best-effort rendering of a captured panic payload.
///
/// `panic!` with a literal stores a `&'static str`; `panic!` with format
/// arguments stores a `String`. Both are recovered here. Any other payload
/// type renders as the placeholder `"Box<dyn Any>"`, matching how the
/// standard panic hook reports non-string payloads.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::{panic_message, try_catch};
///
/// let o = try_catch(|| -> () { panic!("exploded at {}", 3) });
/// let caught = o.into_failure().unwrap();
/// assert_eq!(panic_message(&caught), "exploded at 3");
/// ```
#[must_use]
pub fn panic_message(caught: &Caught) -> &str {
    if let Some(s) = caught.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = caught.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Box<dyn Any>"
    }
}
