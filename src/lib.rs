//! # fallible
//!
//! A functional error-handling library for Rust built around a deferred
//! `Try` monad.
//!
//! ## Overview
//!
//! - **Try**: A computation that may succeed with a value, succeed without
//!   one, or fail. Deferred computations run only when queried, and run
//!   again on every query unless frozen with `execute`.
//! - **Either**: A strict success-or-failure value, with `Observable`
//!   callbacks.
//! - **Command**: A fluent builder of deferred computations over `Either`.
//! - **Composition**: `ThrowingFunction` for chaining functions that can fail.
//!
//! The library never logs and never panics on its own: failures are data
//! until a throwing accessor returns them as `Err`.
//!
//! ## Feature Flags
//!
//! - `control`: `Try`, `Either`, `Observable`, `Command`
//! - `compose`: `ThrowingFunction`
//! - `serde`: Serialization for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! let lower: Try<String, String> = Try::of(|| Ok("X".to_string())).map(|value| value.to_lowercase());
//! assert_eq!(lower.get(), Ok("x".to_string()));
//!
//! let fallback: Try<&str, String> = Try::of(|| Err("boom".to_string())).or(|| Ok("Y"));
//! assert_eq!(fallback.get(), Ok("Y"));
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fallible::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::TryError;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;
