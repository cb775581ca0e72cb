//! Try - a computation that may succeed, succeed without a value, or fail.
//!
//! This module provides the `Try<V, E>` type. A `Try` is in one of three
//! states:
//!
//! - **Success** with a present value
//! - **Success** with an absent value (distinct from failure)
//! - **Failure** carrying an error of type `E`
//!
//! A `Try` built from a computation (`Try::of`) is *deferred*: nothing runs
//! until a query such as `get` or `is_present` forces it. Forcing is never
//! cached. Every query on a deferred `Try` runs the computation again, and
//! [`Try::execute`] is the only way to snapshot the outcome.
//!
//! # Examples
//!
//! ```rust
//! use fallible::control::Try;
//!
//! let lower: Try<String, String> = Try::of(|| Ok("X".to_string())).map(|value| value.to_lowercase());
//! assert_eq!(lower.get(), Ok("x".to_string()));
//!
//! let recovered: Try<&str, String> = Try::of(|| Err("boom".to_string())).or(|| Ok("Y"));
//! assert_eq!(recovered.get(), Ok("Y"));
//! ```
//!
//! ## Repeated Evaluation
//!
//! ```rust
//! use fallible::control::Try;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let deferred: Try<i32, String> = Try::of(move || {
//!     counter.set(counter.get() + 1);
//!     Ok(42)
//! });
//!
//! deferred.is_present();
//! deferred.get().unwrap();
//! assert_eq!(calls.get(), 2);
//!
//! let frozen = deferred.execute();
//! frozen.is_present();
//! frozen.get().unwrap();
//! assert_eq!(calls.get(), 3);
//! ```

use std::convert;
use std::fmt;
use std::rc::Rc;

use super::Either;
use crate::error::TryError;

type Computation<V, E> = Rc<dyn Fn() -> Result<Option<V>, E>>;
type Predicate<V> = Rc<dyn Fn(&V) -> bool>;
type SuccessHook<V> = Rc<dyn Fn(Option<&V>)>;
type FailureHook<E> = Rc<dyn Fn(&E)>;
type Mapper<R, E> = Rc<dyn Fn(R) -> E>;
type Settled<V, E, R> = (Result<Option<V>, E>, Mapper<R, E>);

enum State<V, E> {
    Success(Option<V>),
    Failure(E),
    Deferred(Computation<V, E>),
}

/// Filter and observers attached to one layer of a `Try`.
///
/// The filter runs before the observers, so observers see the filtered value.
struct Hooks<V, E> {
    filter: Option<Predicate<V>>,
    on_success: Option<SuccessHook<V>>,
    on_failure: Option<FailureHook<E>>,
}

impl<V, E> Hooks<V, E> {
    const fn new() -> Self {
        Self {
            filter: None,
            on_success: None,
            on_failure: None,
        }
    }

    const fn is_empty(&self) -> bool {
        self.filter.is_none() && self.on_success.is_none() && self.on_failure.is_none()
    }

    fn apply(&self, outcome: Result<Option<V>, E>) -> Result<Option<V>, E> {
        let outcome = match (outcome, &self.filter) {
            (Ok(Some(value)), Some(predicate)) => Ok(Some(value).filter(|value| predicate(value))),
            (outcome, _) => outcome,
        };
        match (&outcome, &self.on_success, &self.on_failure) {
            (Ok(value), Some(consumer), _) => consumer(value.as_ref()),
            (Err(error), _, Some(consumer)) => consumer(error),
            _ => {}
        }
        outcome
    }
}

impl<V, E> Clone for Hooks<V, E> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            on_success: self.on_success.clone(),
            on_failure: self.on_failure.clone(),
        }
    }
}

/// A possibly deferred computation that may succeed with an optional value or fail.
///
/// # Type Parameters
///
/// * `V` - The type of the success value
/// * `E` - The type of the carried error
/// * `R` - The raw error type accepted from fallible closures, normalized
///   into `E` by the bound mapper. Defaults to `E` with an identity mapper.
///
/// # Evaluation
///
/// Queries take `&self` and force the computation each time they are called.
/// Combinators consume `self` and return a new `Try`. On a plain `Success` or
/// `Failure` they apply immediately; on a deferred `Try`, or one carrying a
/// filter or observer, they compose lazily.
///
/// # Error Mapping
///
/// The mapper bound by [`Try::of_with`] travels with every `Try` derived
/// from it. Errors raised by [`Try::try_map`], [`Try::or`] and [`Try::and`]
/// closures are passed through it, so every failure carries a mapped error.
///
/// # Thread Safety
///
/// `Try` shares its computation through `Rc` and is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use fallible::control::Try;
///
/// let present: Try<i32, String> = Try::success(21);
/// assert_eq!(present.map(|value| value * 2).get(), Ok(42));
///
/// let absent: Try<i32, String> = Try::success_empty();
/// assert!(absent.is_success());
/// assert!(!absent.is_present());
/// assert!(!absent.is_failure());
/// ```
pub struct Try<V, E, R = E> {
    state: State<V, E>,
    hooks: Hooks<V, E>,
    mapper: Mapper<R, E>,
}

static_assertions::assert_not_impl_any!(Try<i32, String>: Send, Sync);

impl<V, E, R> Try<V, E, R> {
    fn layer(state: State<V, E>, mapper: Mapper<R, E>) -> Self {
        Self {
            state,
            hooks: Hooks::new(),
            mapper,
        }
    }

    fn settled(outcome: Result<Option<V>, E>, mapper: Mapper<R, E>) -> Self {
        match outcome {
            Ok(value) => Self::layer(State::Success(value), mapper),
            Err(error) => Self::layer(State::Failure(error), mapper),
        }
    }

    /// Splits a plain `Success`/`Failure` into its outcome and mapper, or
    /// returns `self` when combinators must compose lazily.
    fn into_strict(self) -> Result<Settled<V, E, R>, Self> {
        let Self {
            state,
            hooks,
            mapper,
        } = self;
        if !hooks.is_empty() {
            return Err(Self {
                state,
                hooks,
                mapper,
            });
        }
        match state {
            State::Success(value) => Ok((Ok(value), mapper)),
            State::Failure(error) => Ok((Err(error), mapper)),
            State::Deferred(computation) => Err(Self {
                state: State::Deferred(computation),
                hooks,
                mapper,
            }),
        }
    }

    /// Keeps the state and hooks of `self` under another raw error mapper.
    fn rebound<R2>(self, mapper: Mapper<R2, E>) -> Try<V, E, R2> {
        Try {
            state: self.state,
            hooks: self.hooks,
            mapper,
        }
    }
}

impl<V, E: 'static> Try<V, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success with a present value.
    #[inline]
    pub fn success(value: V) -> Self {
        Self::strict(State::Success(Some(value)))
    }

    /// Creates a success without a value.
    ///
    /// An absent value is not a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let empty: Try<i32, String> = Try::success_empty();
    /// assert!(empty.is_success());
    /// assert_eq!(empty.value(), None);
    /// ```
    #[inline]
    pub fn success_empty() -> Self {
        Self::strict(State::Success(None))
    }

    /// Creates a failure carrying the given error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::strict(State::Failure(error))
    }

    /// Creates a failure from an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::NullArgument`] if `error` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    /// use fallible::error::TryError;
    ///
    /// let missing = Try::<i32, String>::failure_checked(None);
    /// assert!(matches!(missing, Err(TryError::NullArgument { argument: "error" })));
    /// ```
    pub fn failure_checked(error: Option<E>) -> Result<Self, TryError<E>> {
        error
            .map(Self::failure)
            .ok_or(TryError::null_argument("error"))
    }

    fn strict(state: State<V, E>) -> Self {
        Self::layer(state, Rc::new(convert::identity::<E>))
    }
}

impl<V: 'static, E: 'static> Try<V, E> {
    /// Creates a deferred `Try` from a computation.
    ///
    /// The computation does not run until the `Try` is forced. The error it
    /// returns is carried unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let parsed: Try<i32, std::num::ParseIntError> = Try::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.get_or_else(0), 42);
    /// ```
    pub fn of<F>(computation: F) -> Self
    where
        F: Fn() -> Result<V, E> + 'static,
    {
        Self::of_optional(move || computation().map(Some))
    }

    /// Creates a deferred `Try` from a computation whose value may be absent.
    pub fn of_optional<F>(computation: F) -> Self
    where
        F: Fn() -> Result<Option<V>, E> + 'static,
    {
        Self::strict(State::Deferred(Rc::new(computation)))
    }

    /// Creates a deferred `Try` from a computation that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::NullArgument`] if `computation` is `None`.
    pub fn of_checked<F>(computation: Option<F>) -> Result<Self, TryError<E>>
    where
        F: Fn() -> Result<V, E> + 'static,
    {
        computation
            .map(Self::of)
            .ok_or(TryError::null_argument("computation"))
    }
}

impl<V: 'static, E: 'static, R: 'static> Try<V, E, R> {
    /// Creates a deferred `Try` whose raw errors are normalized by `mapper`.
    ///
    /// `mapper` is called once for every raw error the computation returns,
    /// and stays bound to every `Try` derived from this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    /// use std::num::ParseIntError;
    ///
    /// let parsed: Try<i32, String, ParseIntError> = Try::of_with(
    ///     |error: ParseIntError| format!("bad number: {error}"),
    ///     || "x".parse::<i32>(),
    /// );
    /// let recovered = parsed.or(|| "y".parse::<i32>());
    /// assert_eq!(recovered.throw_if_failure(), Err("bad number: invalid digit found in string".to_string()));
    /// ```
    pub fn of_with<M, F>(mapper: M, computation: F) -> Self
    where
        M: Fn(R) -> E + 'static,
        F: Fn() -> Result<V, R> + 'static,
    {
        let mapper: Mapper<R, E> = Rc::new(mapper);
        let bound = Rc::clone(&mapper);
        Self::deferred(move || computation().map(Some).map_err(&*bound), mapper)
    }

    /// Creates a deferred `Try` from a mapper and a computation that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::NullArgument`] naming the first absent argument.
    pub fn of_with_checked<M, F>(
        mapper: Option<M>,
        computation: Option<F>,
    ) -> Result<Self, TryError<E>>
    where
        M: Fn(R) -> E + 'static,
        F: Fn() -> Result<V, R> + 'static,
    {
        let mapper = mapper.ok_or(TryError::null_argument("mapper"))?;
        let computation = computation.ok_or(TryError::null_argument("computation"))?;
        Ok(Self::of_with(mapper, computation))
    }

    fn deferred<F>(computation: F, mapper: Mapper<R, E>) -> Self
    where
        F: Fn() -> Result<Option<V>, E> + 'static,
    {
        Self::layer(State::Deferred(Rc::new(computation)), mapper)
    }
}

impl<V: Clone + 'static, E: Clone + 'static, R: 'static> Try<V, E, R> {
    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Runs the computation once and applies this layer's filter and observers.
    fn evaluate(&self) -> Result<Option<V>, E> {
        let outcome = match &self.state {
            State::Success(value) => Ok(value.clone()),
            State::Failure(error) => Err(error.clone()),
            State::Deferred(computation) => computation(),
        };
        self.hooks.apply(outcome)
    }

    /// Wraps `self` in a new deferred layer with no hooks of its own.
    fn sealed(self) -> Self {
        let mapper = Rc::clone(&self.mapper);
        Self::deferred(move || self.evaluate(), mapper)
    }

    /// Forces the computation once and returns a snapshot of the outcome.
    ///
    /// The returned `Try` is a plain `Success` or `Failure`: querying it
    /// never runs the computation or the observers again. On a plain
    /// `Success` or `Failure` this returns an equivalent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let frozen: Try<&str, String> = Try::of(|| Ok("X")).execute();
    /// assert_eq!(frozen.get(), Ok("X"));
    /// assert_eq!(frozen.execute().get(), Ok("X"));
    /// ```
    #[must_use]
    pub fn execute(&self) -> Self {
        Self::settled(self.evaluate(), Rc::clone(&self.mapper))
    }

    /// Forces the computation and returns its outcome as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the carried error if the computation fails.
    pub fn to_result(&self) -> Result<Option<V>, E> {
        self.evaluate()
    }

    /// Forces the computation and returns its outcome as an [`Either`].
    pub fn to_either(&self) -> Either<Option<V>, E> {
        self.evaluate().into()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the computation fails.
    pub fn is_failure(&self) -> bool {
        self.evaluate().is_err()
    }

    /// Returns `true` if the computation succeeds, with or without a value.
    pub fn is_success(&self) -> bool {
        self.evaluate().is_ok()
    }

    /// Returns `true` if the computation succeeds with a value that passes the filter.
    pub fn is_present(&self) -> bool {
        matches!(self.evaluate(), Ok(Some(_)))
    }

    /// Returns the value if present.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::NoSuchElement`] if the value is absent or the
    /// computation fails.
    pub fn get(&self) -> Result<V, TryError<E>> {
        self.value().ok_or(TryError::NoSuchElement)
    }

    /// Returns the value if present, otherwise `default`.
    pub fn get_or_else(&self, default: V) -> V {
        self.value().unwrap_or(default)
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    ///
    /// `supplier` is only called when no value is present.
    pub fn get_or_else_with<F>(&self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.value().unwrap_or_else(supplier)
    }

    /// Same as [`Try::get_or_else`].
    #[inline]
    pub fn or_else(&self, default: V) -> V {
        self.get_or_else(default)
    }

    /// Same as [`Try::get_or_else_with`].
    #[inline]
    pub fn or_else_get<F>(&self, supplier: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.get_or_else_with(supplier)
    }

    /// Returns the value, re-raising the carried error on failure.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::Failed`] with the carried error on failure and
    /// [`TryError::NoSuchElement`] if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    /// use fallible::error::TryError;
    ///
    /// let empty: Try<i32, String> = Try::success_empty();
    /// assert_eq!(empty.get_or_throw(), Err(TryError::NoSuchElement));
    /// ```
    pub fn get_or_throw(&self) -> Result<V, TryError<E>> {
        match self.evaluate() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(TryError::NoSuchElement),
            Err(error) => Err(TryError::Failed(error)),
        }
    }

    /// Returns the value, or `default` if absent, re-raising the carried error on failure.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::Failed`] with the carried error on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    /// use fallible::error::TryError;
    ///
    /// let empty: Try<i32, String> = Try::success_empty();
    /// assert_eq!(empty.get_or_throw_default(7), Ok(7));
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.get_or_throw_default(7), Err(TryError::Failed("boom".to_string())));
    /// ```
    pub fn get_or_throw_default(&self, default: V) -> Result<V, TryError<E>> {
        self.evaluate()
            .map(|value| value.unwrap_or(default))
            .map_err(TryError::Failed)
    }

    /// Returns the value if present.
    pub fn value(&self) -> Option<V> {
        self.evaluate().ok().flatten()
    }

    /// Re-raises the carried error on failure.
    ///
    /// # Errors
    ///
    /// Returns the carried error on failure, whether or not a value is present otherwise.
    pub fn throw_if_failure(&self) -> Result<(), E> {
        self.evaluate().map(|_| ())
    }

    /// Calls `consumer` with the value if present.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(V),
    {
        if let Some(value) = self.value() {
            consumer(value);
        }
    }

    /// Calls `consumer` with the value if present, re-raising the carried error on failure.
    ///
    /// An absent value calls nothing and raises nothing.
    ///
    /// # Errors
    ///
    /// Returns the carried error on failure.
    pub fn if_present_or_throw<F>(&self, consumer: F) -> Result<(), E>
    where
        F: FnOnce(V),
    {
        self.evaluate().map(|value| value.map_or((), consumer))
    }

    /// Calls `consumer` with the optional value if the computation succeeds.
    pub fn if_success<F>(&self, consumer: F)
    where
        F: FnOnce(Option<V>),
    {
        if let Ok(value) = self.evaluate() {
            consumer(value);
        }
    }

    /// Calls `consumer` with the carried error if the computation fails.
    pub fn if_failure<F>(&self, consumer: F)
    where
        F: FnOnce(E),
    {
        if let Err(error) = self.evaluate() {
            consumer(error);
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// Failures and absent values pass through without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let absent: Try<i32, String> = Try::success_empty();
    /// assert!(!absent.map(|value| value + 1).is_present());
    /// ```
    pub fn map<U, F>(self, function: F) -> Try<U, E, R>
    where
        U: Clone + 'static,
        F: Fn(V) -> U + 'static,
    {
        self.map_optional(move |value| Some(function(value)))
    }

    /// Applies `function` to the value if present; a `None` result becomes an absent success.
    pub fn map_optional<U, F>(self, function: F) -> Try<U, E, R>
    where
        U: Clone + 'static,
        F: Fn(V) -> Option<U> + 'static,
    {
        match self.into_strict() {
            Ok((outcome, mapper)) => {
                Try::settled(outcome.map(|value| value.and_then(function)), mapper)
            }
            Err(pending) => {
                let mapper = Rc::clone(&pending.mapper);
                Try::deferred(
                    move || pending.evaluate().map(|value| value.and_then(&function)),
                    mapper,
                )
            }
        }
    }

    /// Applies a fallible `function` to the value if present.
    ///
    /// A raw error returned by `function` is passed through the bound mapper
    /// and becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let text: Try<&str, String> = Try::success("x");
    /// let parsed = text.try_map(|value| value.parse::<i32>().map_err(|error| error.to_string()));
    /// assert!(parsed.is_failure());
    /// ```
    pub fn try_map<U, F>(self, function: F) -> Try<U, E, R>
    where
        U: Clone + 'static,
        F: Fn(V) -> Result<U, R> + 'static,
    {
        match self.into_strict() {
            Ok((outcome, mapper)) => {
                let outcome = outcome
                    .and_then(|value| value.map(function).transpose().map_err(&*mapper));
                Try::settled(outcome, mapper)
            }
            Err(pending) => {
                let mapper = Rc::clone(&pending.mapper);
                Try::deferred(
                    move || {
                        pending.evaluate().and_then(|value| {
                            value.map(&function).transpose().map_err(&*pending.mapper)
                        })
                    },
                    mapper,
                )
            }
        }
    }

    /// Applies `function` to the value if present and continues with the returned `Try`.
    ///
    /// Failures and absent values pass through without calling `function`.
    /// On a plain success the returned `Try` is used as is, so a deferred
    /// inner `Try` stays deferred. The result keeps the mapper bound to `self`.
    pub fn flat_map<U, X, F>(self, function: F) -> Try<U, E, R>
    where
        U: Clone + 'static,
        X: 'static,
        F: Fn(V) -> Try<U, E, X> + 'static,
    {
        match self.into_strict() {
            Ok((Ok(Some(value)), mapper)) => function(value).rebound(mapper),
            Ok((Ok(None), mapper)) => Try::settled(Ok(None), mapper),
            Ok((Err(error), mapper)) => Try::settled(Err(error), mapper),
            Err(pending) => {
                let mapper = Rc::clone(&pending.mapper);
                Try::deferred(
                    move || match pending.evaluate()? {
                        Some(value) => function(value).evaluate(),
                        None => Ok(None),
                    },
                    mapper,
                )
            }
        }
    }

    /// Attaches a predicate applied to the value whenever the `Try` is forced.
    ///
    /// A rejected value becomes absent; it never becomes a failure. The
    /// predicate is not called on failures or absent values. Chained filters
    /// behave as their conjunction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let before: Try<String, String> = Try::success("X".to_string())
    ///     .filter(|value| value == "x")
    ///     .map(|value| value.to_lowercase());
    /// assert!(!before.is_present());
    ///
    /// let after: Try<String, String> = Try::success("X".to_string())
    ///     .map(|value| value.to_lowercase())
    ///     .filter(|value| value == "x");
    /// assert!(after.is_present());
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&V) -> bool + 'static,
    {
        let mut layer = if self.hooks.is_empty() { self } else { self.sealed() };
        layer.hooks.filter = Some(Rc::new(predicate));
        layer
    }

    /// Normalizes the carried error through `mapper`.
    ///
    /// A plain `Failure` is re-mapped immediately; a deferred `Try` maps
    /// every error it produces. The bound raw error mapper is extended with
    /// `mapper`, so later raw errors land in `E2` as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let failed: Try<i32, i32> = Try::failure(4);
    /// assert_eq!(failed.convert(|code| format!("code {code}")).throw_if_failure(), Err("code 4".to_string()));
    /// ```
    pub fn convert<E2, M>(self, mapper: M) -> Try<V, E2, R>
    where
        E2: Clone + 'static,
        M: Fn(E) -> E2 + 'static,
    {
        let mapper = Rc::new(mapper);
        let raw_mapper: Mapper<R, E2> = {
            let previous = Rc::clone(&self.mapper);
            let mapper = Rc::clone(&mapper);
            Rc::new(move |raw: R| mapper(previous(raw)))
        };
        match self.into_strict() {
            Ok((outcome, _)) => Try::settled(outcome.map_err(&*mapper), raw_mapper),
            Err(pending) => {
                Try::deferred(move || pending.evaluate().map_err(&*mapper), raw_mapper)
            }
        }
    }

    // =========================================================================
    // Fallback and Sequencing
    // =========================================================================

    /// Falls back to `alternative` if the computation fails.
    ///
    /// `alternative` is never called on success, even when the value is
    /// absent. A raw error it returns is passed through the bound mapper.
    #[must_use]
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: Fn() -> Result<V, R> + 'static,
    {
        match self.into_strict() {
            Ok((Err(_), mapper)) => {
                let outcome = alternative().map(Some).map_err(&*mapper);
                Self::settled(outcome, mapper)
            }
            Ok((outcome, mapper)) => Self::settled(outcome, mapper),
            Err(pending) => {
                let mapper = Rc::clone(&pending.mapper);
                Self::deferred(
                    move || match pending.evaluate() {
                        Err(_) => alternative().map(Some).map_err(&*pending.mapper),
                        outcome => outcome,
                    },
                    mapper,
                )
            }
        }
    }

    /// Continues with `next` if the computation succeeds, discarding the current value.
    ///
    /// `next` is never called on failure. Observers attached before `and`
    /// still fire for the first outcome. A raw error returned by `next` is
    /// passed through the bound mapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    ///
    /// let sequenced: Try<&str, String> = Try::of(|| Ok("X")).and(|| Ok("Y"));
    /// assert_eq!(sequenced.get(), Ok("Y"));
    /// ```
    pub fn and<U, F>(self, next: F) -> Try<U, E, R>
    where
        U: Clone + 'static,
        F: Fn() -> Result<U, R> + 'static,
    {
        match self.into_strict() {
            Ok((Ok(_), mapper)) => {
                let outcome = next().map(Some).map_err(&*mapper);
                Try::settled(outcome, mapper)
            }
            Ok((Err(error), mapper)) => Try::settled(Err(error), mapper),
            Err(pending) => {
                let mapper = Rc::clone(&pending.mapper);
                Try::deferred(
                    move || {
                        pending.evaluate()?;
                        next().map(Some).map_err(&*pending.mapper)
                    },
                    mapper,
                )
            }
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Attaches an observer called with the optional value each time the `Try`
    /// is forced to a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::control::Try;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let observer = Rc::clone(&seen);
    /// let observed: Try<i32, String> = Try::success(7).on_success(move |value| {
    ///     observer.set(*value.unwrap());
    /// });
    ///
    /// assert_eq!(seen.get(), 0);
    /// observed.is_present();
    /// assert_eq!(seen.get(), 7);
    /// ```
    #[must_use]
    pub fn on_success<F>(self, consumer: F) -> Self
    where
        F: Fn(Option<&V>) + 'static,
    {
        let mut layer = if self.hooks.on_success.is_none() { self } else { self.sealed() };
        layer.hooks.on_success = Some(Rc::new(consumer));
        layer
    }

    /// Attaches an observer called with the carried error each time the `Try`
    /// is forced to a failure.
    #[must_use]
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: Fn(&E) + 'static,
    {
        let mut layer = if self.hooks.on_failure.is_none() { self } else { self.sealed() };
        layer.hooks.on_failure = Some(Rc::new(consumer));
        layer
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<V: Clone, E: Clone, R> Clone for Try<V, E, R> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Success(value) => State::Success(value.clone()),
            State::Failure(error) => State::Failure(error.clone()),
            State::Deferred(computation) => State::Deferred(Rc::clone(computation)),
        };
        Self {
            state,
            hooks: self.hooks.clone(),
            mapper: Rc::clone(&self.mapper),
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug, R> fmt::Debug for Try<V, E, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
            State::Deferred(_) => formatter.write_str("Deferred(<computation>)"),
        }
    }
}

impl<V, E: 'static> From<Either<V, E>> for Try<V, E> {
    fn from(either: Either<V, E>) -> Self {
        match either {
            Either::Success(value) => Self::success(value),
            Either::Failure(error) => Self::failure(error),
        }
    }
}

impl<V, E: 'static> From<Result<V, E>> for Try<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}
