//! Result containers for functional error handling.
//!
//! This module provides:
//!
//! - [`Try`]: A possibly deferred computation that succeeds with an optional
//!   value or fails, with chaining, fallback, filtering and observers
//! - [`Either`]: A strict success-or-failure value
//! - [`Observable`]: Callbacks fired on the outcome of an `Either`
//! - [`Command`]: A deferred computation executed into an `Either`
//!
//! # Examples
//!
//! ## Deferred Computation
//!
//! ```rust
//! use fallible::control::Try;
//!
//! let attempt: Try<i32, String> = Try::of(|| Err("unavailable".to_string()))
//!     .or(|| Ok(1))
//!     .map(|value| value * 10);
//! assert_eq!(attempt.get(), Ok(10));
//! ```
//!
//! ## Strict Outcome
//!
//! ```rust
//! use fallible::control::{Command, Either};
//!
//! let outcome: Either<i32, String> = Command::value(2).map(|value| value + 1).execute();
//! assert_eq!(outcome, Either::success(3));
//! ```

mod attempt;
mod command;
mod either;
mod observable;

pub use attempt::Try;
pub use command::Command;
pub use either::Either;
pub use observable::Observable;
