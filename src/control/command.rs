//! Command - a deferred computation executed into an [`Either`].
//!
//! A `Command` describes work without running it. Transformations compose
//! lazily, and each call to [`Command::execute`] runs the whole pipeline
//! again.
//!
//! # Examples
//!
//! ```rust
//! use fallible::control::{Command, Either};
//!
//! let command: Command<usize, String> = Command::value("hello").map(str::len);
//! assert_eq!(command.execute(), Either::success(5));
//!
//! let failing: Command<usize, String> = Command::<&str, String>::error("boom".to_string()).map(str::len);
//! assert_eq!(failing.execute(), Either::failure("boom".to_string()));
//! ```

use std::fmt;
use std::rc::Rc;

use super::Either;

type Computation<V, E> = Rc<dyn Fn() -> Result<V, E>>;

/// A deferred computation producing an [`Either`] when executed.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `E` - The type of the error
pub struct Command<V, E> {
    computation: Computation<V, E>,
}

static_assertions::assert_not_impl_any!(Command<i32, String>: Send, Sync);

impl<V: 'static, E: 'static> Command<V, E> {
    /// Creates a command from a computation.
    pub fn of<F>(computation: F) -> Self
    where
        F: Fn() -> Result<V, E> + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Executes the computation and returns its outcome.
    ///
    /// The computation runs once per call.
    pub fn execute(&self) -> Either<V, E> {
        (self.computation)().into()
    }

    /// Applies `function` to the success value.
    pub fn map<R, F>(self, function: F) -> Command<R, E>
    where
        R: 'static,
        F: Fn(V) -> R + 'static,
    {
        Command::of(move || (self.computation)().map(&function))
    }

    /// Applies a fallible `function` to the success value; its error becomes a failure.
    pub fn try_map<R, F>(self, function: F) -> Command<R, E>
    where
        R: 'static,
        F: Fn(V) -> Result<R, E> + 'static,
    {
        Command::of(move || (self.computation)().and_then(&function))
    }

    /// Continues with the command returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::{Command, Either};
    ///
    /// let halve = |value: i32| {
    ///     Command::of(move || if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) })
    /// };
    /// assert_eq!(Command::value(8).flat_map(halve).execute(), Either::success(4));
    /// assert_eq!(Command::value(3).flat_map(halve).execute(), Either::failure("3 is odd".to_string()));
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Command<R, E>
    where
        R: 'static,
        F: Fn(V) -> Command<R, E> + 'static,
    {
        Command::of(move || function((self.computation)()?).execute().into_result())
    }
}

impl<V: Clone + 'static, E: 'static> Command<V, E> {
    /// Creates a command that always succeeds with `value`.
    pub fn value(value: V) -> Self {
        Self::of(move || Ok(value.clone()))
    }
}

impl<V: 'static, E: Clone + 'static> Command<V, E> {
    /// Creates a command that always fails with `error`.
    pub fn error(error: E) -> Self {
        Self::of(move || Err(error.clone()))
    }
}

impl<V: Clone + 'static, E: Clone + 'static> Command<V, E> {
    /// Creates a command that replays the outcome of `either`.
    pub fn from_either(either: Either<V, E>) -> Self {
        Self::of(move || either.clone().into_result())
    }
}

impl<V, E> Clone for Command<V, E> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<V, E> fmt::Debug for Command<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Command(<computation>)")
    }
}
