#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A computation outcome that is exactly one of success or failure.
///
/// `Outcome<T, E>` carries either a payload of type `T` or a caller-defined
/// error of type `E`. Failure travels as ordinary, inspectable data through
/// `map`/`map_err`/`and_then` chains; nothing in the combinator surface can
/// terminate abnormally. The single escape hatch back into panic-style
/// termination is [`unwrap`](Outcome::unwrap)/[`expect`](Outcome::expect),
/// opted into per call site.
///
/// The enum tag is the sole discriminant — there is no sentinel "absent"
/// slot, so a payload that is zero, empty, or otherwise falsy is never
/// confused with a failure.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, &'static str> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure("odd input")
///     }
/// }
///
/// let chained = halve(8).and_then(halve).map(|n| n + 1);
/// assert_eq!(chained, Outcome::success(3));
///
/// let failed = halve(3).map(|n| n + 1);
/// assert_eq!(failed, Outcome::failure("odd input"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// Pure and total; the payload is stored without inspection.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome.
    ///
    /// Pure and total; the error is stored without inspection.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::success(0).is_success());
    /// assert!(!Outcome::<i32, &str>::failure("e").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::failure("e").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success payload using the provided function.
    ///
    /// On success, `f` is invoked exactly once with the payload. On failure,
    /// the error is carried through unchanged and `f` is never invoked; only
    /// the success type parameter changes.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the payload from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21);
    /// assert_eq!(o.map(|n| n * 2), Outcome::success(42));
    ///
    /// let e = Outcome::<i32, &str>::failure("boom");
    /// assert_eq!(e.map(|n| n * 2), Outcome::failure("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error using the provided function.
    ///
    /// The mirror image of [`map`](Outcome::map): on failure, `f` is invoked
    /// exactly once with the error; on success, the payload is carried
    /// through unchanged and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let e = Outcome::<i32, i32>::failure(404);
    /// assert_eq!(e.map_err(|c| format!("code {}", c)),
    ///            Outcome::failure("code 404".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that itself produces an outcome.
    ///
    /// On success, returns `f(payload)` directly — the outcome `f` produces,
    /// not a nested one. On failure, the error is carried through and `f` is
    /// never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step's outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse(s: &str) -> Outcome<i32, String> {
    ///     match s.parse() {
    ///         Ok(n) => Outcome::success(n),
    ///         Err(e) => Outcome::failure(e.to_string()),
    ///     }
    /// }
    ///
    /// let o = Outcome::<&str, String>::success("42").and_then(parse);
    /// assert_eq!(o, Outcome::success(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` if the outcome is a failure, otherwise returns the success.
    ///
    /// # Arguments
    ///
    /// * `op` - The recovery function, invoked with the error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let e = Outcome::<i32, &str>::failure("gone");
    /// let recovered: Outcome<i32, &str> = e.or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the payload, or `default` on failure.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) when computing it is
    /// costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(5).unwrap_or(0), 5);
    /// assert_eq!(Outcome::<i32, &str>::failure("e").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the payload, or computes a fallback from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let e = Outcome::<usize, &str>::failure("boom");
    /// assert_eq!(e.unwrap_or_else(|err| err.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the payload, panicking on failure.
    ///
    /// This is the unwrap violation: the one deliberate exit from
    /// failure-as-data back into abnormal termination. The panic message
    /// embeds the `Debug` rendering of the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with the message
    /// `called unwrap on a failure value: <error>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).unwrap(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called unwrap on a failure value: {:?}", error)
            }
        }
    }

    /// Returns the payload, panicking with `msg` on failure.
    ///
    /// Like [`unwrap`](Outcome::unwrap) but prefixes the panic message with
    /// caller-supplied context: `<msg>: <error>`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).expect("want seven"), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<String, &str> = Outcome::success("hi".to_string());
    /// assert_eq!(o.as_ref().map(|s| s.len()), Outcome::success(2));
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extracts the payload, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_success(), Some(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_failure(), Some("e"));
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).to_result(), Ok(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").to_result(), Err("e"));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a standard [`Result`] into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r: Result<i32, &str> = Ok(42);
    /// assert_eq!(Outcome::from_result(r), Outcome::success(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
