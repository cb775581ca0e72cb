//! Function composition utilities.
//!
//! This module provides [`ThrowingFunction`], composition for functions
//! that can fail, and the matching [`identity`].
//!
//! # Examples
//!
//! ```
//! use fallible::compose::ThrowingFunction;
//!
//! fn trim(text: String) -> Result<String, String> {
//!     Ok(text.trim().to_string())
//! }
//!
//! fn non_empty(text: String) -> Result<String, String> {
//!     if text.is_empty() { Err("empty".to_string()) } else { Ok(text) }
//! }
//!
//! let clean = non_empty.compose(trim);
//! assert_eq!(clean("  hi ".to_string()), Ok("hi".to_string()));
//! assert_eq!(clean("   ".to_string()), Err("empty".to_string()));
//! ```

mod throwing;

pub use throwing::{ThrowingFunction, identity};
