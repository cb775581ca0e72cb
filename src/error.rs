//! Error types for the result containers.
//!
//! Errors carried by a failed computation are user-defined and travel
//! through the containers as data. This module defines the few conditions
//! the library raises on its own: an absent required argument, an
//! extraction attempted on an absent value, and the re-raised carried error.

use std::error::Error;
use std::fmt;

/// Represents the errors raised by the extraction and checked-construction
/// operations of [`Try`](crate::control::Try) and
/// [`Either`](crate::control::Either).
///
/// # Type Parameters
///
/// * `E` - The carried error type, re-raised through [`TryError::Failed`].
///
/// # Examples
///
/// ```rust
/// use fallible::control::Try;
/// use fallible::error::TryError;
///
/// let empty: Try<i32, String> = Try::success_empty();
/// assert_eq!(empty.get(), Err(TryError::NoSuchElement));
///
/// let failed: Try<i32, String> = Try::failure("boom".to_string());
/// assert_eq!(failed.get_or_throw(), Err(TryError::Failed("boom".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryError<E> {
    /// A required argument was absent.
    NullArgument {
        /// The name of the absent argument.
        argument: &'static str,
    },
    /// A value was requested but none is present.
    NoSuchElement,
    /// The error carried by a failure, re-raised to the caller.
    Failed(E),
}

impl<E> TryError<E> {
    /// Returns `true` if this is a [`TryError::NoSuchElement`].
    #[inline]
    pub const fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement)
    }

    /// Returns the carried error if this is a [`TryError::Failed`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::error::TryError;
    ///
    /// let error: TryError<&str> = TryError::Failed("boom");
    /// assert_eq!(error.failed(), Some("boom"));
    /// assert_eq!(TryError::<&str>::NoSuchElement.failed(), None);
    /// ```
    #[inline]
    pub fn failed(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Applies a function to the carried error, leaving the other variants unchanged.
    #[inline]
    pub fn map_failed<E2, F>(self, function: F) -> TryError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::NullArgument { argument } => TryError::NullArgument { argument },
            Self::NoSuchElement => TryError::NoSuchElement,
            Self::Failed(error) => TryError::Failed(function(error)),
        }
    }

    pub(crate) const fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }
}

impl<E: fmt::Display> fmt::Display for TryError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { argument } => {
                write!(formatter, "required argument `{argument}` is absent")
            }
            Self::NoSuchElement => write!(formatter, "no value present"),
            Self::Failed(error) => write!(formatter, "computation failed: {error}"),
        }
    }
}

impl<E: Error + 'static> Error for TryError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "disk full")
        }
    }

    impl Error for DiskFull {}

    #[rstest]
    #[case(TryError::NullArgument { argument: "computation" }, "required argument `computation` is absent")]
    #[case(TryError::NoSuchElement, "no value present")]
    #[case(TryError::Failed(DiskFull), "computation failed: disk full")]
    fn test_display(#[case] error: TryError<DiskFull>, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_source_is_carried_error() {
        let error = TryError::Failed(DiskFull);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
    }

    #[rstest]
    fn test_source_is_none_for_library_errors() {
        assert!(TryError::<DiskFull>::NoSuchElement.source().is_none());
        assert!(TryError::<DiskFull>::null_argument("error").source().is_none());
    }

    #[rstest]
    fn test_map_failed_only_touches_carried_error() {
        let mapped = TryError::Failed(2).map_failed(|code| code * 10);
        assert_eq!(mapped, TryError::Failed(20));

        let untouched: TryError<i32> = TryError::<i32>::NoSuchElement.map_failed(|code| code * 10);
        assert!(untouched.is_no_such_element());
    }
}
