//! Observable - callbacks fired on the outcome of an [`Either`].

use std::fmt;

use super::Either;

/// Observes an [`Either`], calling one callback when it is read back.
///
/// Each setter replaces the previous callback of the same kind. Nothing is
/// called until [`Observable::get`].
///
/// # Examples
///
/// ```rust
/// use fallible::control::Either;
///
/// let mut errors = Vec::new();
/// let failure: Either<i32, String> = Either::failure("boom".to_string());
/// let returned = failure
///     .observe()
///     .on_success(|_| panic!("not a success"))
///     .on_failure(|error| errors.push(error.clone()))
///     .get();
///
/// assert!(returned.is_failure());
/// assert_eq!(errors, vec!["boom".to_string()]);
/// ```
pub struct Observable<'a, V, E> {
    either: Either<V, E>,
    on_success: Option<Box<dyn FnOnce(&V) + 'a>>,
    on_failure: Option<Box<dyn FnOnce(&E) + 'a>>,
}

impl<'a, V, E> Observable<'a, V, E> {
    pub(crate) const fn new(either: Either<V, E>) -> Self {
        Self {
            either,
            on_success: None,
            on_failure: None,
        }
    }

    /// Sets the callback fired with the success value.
    #[must_use]
    pub fn on_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&V) + 'a,
    {
        Self {
            on_success: Some(Box::new(consumer)),
            ..self
        }
    }

    /// Sets the callback fired with the error.
    #[must_use]
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&E) + 'a,
    {
        Self {
            on_failure: Some(Box::new(consumer)),
            ..self
        }
    }

    /// Fires the callback matching the outcome and returns the observed `Either`.
    pub fn get(self) -> Either<V, E> {
        match (&self.either, self.on_success, self.on_failure) {
            (Either::Success(value), Some(consumer), _) => consumer(value),
            (Either::Failure(error), _, Some(consumer)) => consumer(error),
            _ => {}
        }
        self.either
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Observable<'_, V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Observable")
            .field("either", &self.either)
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}
