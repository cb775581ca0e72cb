//! Composition of functions that can fail.
//!
//! A throwing function is any `Fn(T) -> Result<R, E>`. The
//! [`ThrowingFunction`] trait gives such functions `compose` and
//! `and_then`, short-circuiting on the first error.

/// A function from `T` to `R` that may fail with `E`.
///
/// Implemented for every `Fn(T) -> Result<R, E>`.
///
/// # Examples
///
/// ```
/// use fallible::compose::ThrowingFunction;
///
/// let parse = |text: &str| text.parse::<i32>().map_err(|error| error.to_string());
/// let halve = |value: i32| {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
/// };
///
/// let parse_then_halve = parse.and_then(halve);
/// assert_eq!(parse_then_halve.apply("8"), Ok(4));
/// assert_eq!(parse_then_halve.apply("3"), Err("3 is odd".to_string()));
/// ```
pub trait ThrowingFunction<T, R, E> {
    /// Applies the function to `value`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the function.
    fn apply(&self, value: T) -> Result<R, E>;

    /// Returns a function that applies `before` first, then `self`.
    fn compose<V, B>(self, before: B) -> impl Fn(V) -> Result<R, E>
    where
        Self: Sized,
        B: ThrowingFunction<V, T, E>,
    {
        move |value| self.apply(before.apply(value)?)
    }

    /// Returns a function that applies `self` first, then `after`.
    fn and_then<V, A>(self, after: A) -> impl Fn(T) -> Result<V, E>
    where
        Self: Sized,
        A: ThrowingFunction<R, V, E>,
    {
        move |value| after.apply(self.apply(value)?)
    }
}

impl<T, R, E, F> ThrowingFunction<T, R, E> for F
where
    F: Fn(T) -> Result<R, E>,
{
    #[inline]
    fn apply(&self, value: T) -> Result<R, E> {
        self(value)
    }
}

/// Returns a throwing function that always succeeds with its input.
///
/// # Examples
///
/// ```
/// use fallible::compose::{ThrowingFunction, identity};
///
/// let same = identity::<i32, String>();
/// assert_eq!(same.apply(7), Ok(7));
/// ```
#[inline]
pub fn identity<T, E>() -> impl Fn(T) -> Result<T, E> {
    Ok
}
