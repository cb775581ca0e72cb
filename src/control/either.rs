//! Either type - a strict success-or-failure value.
//!
//! This module provides the `Either<V, E>` type, which is either a
//! `Success(V)` or a `Failure(E)`. Unlike [`Try`](super::Try), an `Either`
//! is always evaluated: it holds an outcome, never a computation.
//!
//! # Examples
//!
//! ```rust
//! use fallible::control::Either;
//!
//! let parsed: Either<i32, String> = Either::success("42")
//!     .try_map(|text: &str| text.parse::<i32>().map_err(|error| error.to_string()));
//! assert_eq!(parsed.or_else(0), 42);
//!
//! let failed: Either<i32, String> = Either::failure("boom".to_string());
//! assert_eq!(failed.or(|| Either::success(7)), Either::success(7));
//! ```

use std::fmt;

use super::Observable;
use crate::error::TryError;

/// The outcome of a computation: a success value or an error.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `E` - The type of the error
///
/// # Examples
///
/// ```rust
/// use fallible::control::Either;
///
/// let success: Either<i32, String> = Either::success(21);
/// let doubled = success.map(|value| value * 2);
/// assert_eq!(doubled.into_result(), Ok(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<V, E> {
    /// The computation succeeded with a value.
    Success(V),
    /// The computation failed with an error.
    Failure(E),
}

impl<V, E> Either<V, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a failure from an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::NullArgument`] if `error` is `None`.
    pub fn failure_checked(error: Option<E>) -> Result<Self, TryError<E>> {
        error
            .map(Self::Failure)
            .ok_or(TryError::null_argument("error"))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns an iterator over the success value, yielding at most one item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Either;
    ///
    /// let success: Either<i32, String> = Either::success(1);
    /// assert_eq!(success.iter().count(), 1);
    ///
    /// let failure: Either<i32, String> = Either::failure("boom".to_string());
    /// assert_eq!(failure.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&V> {
        self.get().into_iter()
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn or_else(self, default: V) -> V {
        self.or_else_get(|| default)
    }

    /// Returns the success value, or the result of `supplier` on failure.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the success value, raising the error on failure.
    ///
    /// # Errors
    ///
    /// Returns the error on failure.
    #[inline]
    pub fn or_throw(self) -> Result<V, E> {
        self.into_result()
    }

    /// Returns the success value, raising the transformed error on failure.
    ///
    /// # Errors
    ///
    /// Returns `function(error)` on failure.
    #[inline]
    pub fn or_throw_with<E2, F>(self, function: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.into_result().map_err(function)
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn optional(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error on failure.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Returns `self` on success, or the `Either` produced by `supplier` on failure.
    #[must_use]
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => supplier(),
        }
    }

    /// Applies `function` to the success value.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Either<R, E>
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Self::Success(value) => Either::Success(function(value)),
            Self::Failure(error) => Either::Failure(error),
        }
    }

    /// Applies a fallible `function` to the success value; its error becomes a failure.
    #[inline]
    pub fn try_map<R, F>(self, function: F) -> Either<R, E>
    where
        F: FnOnce(V) -> Result<R, E>,
    {
        self.flat_map(|value| function(value).into())
    }

    /// Applies `function` to the success value and continues with the returned `Either`.
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Either<R, E>
    where
        F: FnOnce(V) -> Either<R, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Either::Failure(error),
        }
    }

    /// Returns an [`Observable`] over this `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Either;
    ///
    /// let mut seen = None;
    /// let either: Either<i32, String> = Either::success(3);
    /// let returned = either.observe().on_success(|value| seen = Some(*value)).get();
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(returned, Either::success(3));
    /// ```
    #[inline]
    pub fn observe<'a>(self) -> Observable<'a, V, E> {
        Observable::new(self)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Either<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V, E> From<Result<V, E>> for Either<V, E> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Either<V, E>> for Result<V, E> {
    /// Converts an `Either` to a `Result`.
    #[inline]
    fn from(either: Either<V, E>) -> Self {
        match either {
            Either::Success(value) => Ok(value),
            Either::Failure(error) => Err(error),
        }
    }
}

impl<V, E> IntoIterator for Either<V, E> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.optional().into_iter()
    }
}
