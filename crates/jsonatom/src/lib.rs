//! Strict decoding of a single JSON scalar value.
//!
//! [`parse`] accepts exactly one `null`, `true`, `false`, number, or string
//! (with optional surrounding whitespace) and returns a tagged [`Value`].
//! The crate is built for correctness on *malformed* input: every way the
//! text can be syntactically wrong maps to a distinct [`ParseError`] code,
//! and escape sequences, including UTF-16 surrogate pairs in `\u` escapes,
//! are decoded without ever producing invalid UTF-8.
//!
//! Arrays, objects, and value-to-text serialization are not part of the
//! accepted grammar.
//!
//! ```rust
//! use jsonatom::{ParseError, Value, parse};
//!
//! assert_eq!(parse("  3.1416  "), Ok(Value::Number(3.1416)));
//! assert_eq!(
//!     parse(r#""𝄞""#),
//!     Ok(Value::String("\u{1D11E}".into()))
//! );
//! assert_eq!(parse("truth"), Err(ParseError::InvalidValue));
//! assert_eq!(parse("true false"), Err(ParseError::RootNotSingular));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod scratch;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse;
pub use value::Value;
