//! JSON scalar values.
//!
//! This module defines the [`Value`] enum produced by a successful parse,
//! together with the accessors and mutators embedders use to inspect and
//! rebuild values.

use alloc::string::String;
use core::str::FromStr;

use crate::{error::ParseError, parser};

/// One decoded JSON scalar.
///
/// The variants are exactly the kinds the parser can produce; arrays and
/// objects are not part of the grammar this crate accepts. Replacing a
/// value (by assignment or through a `set_*` mutator) drops any owned
/// string payload exactly once.
///
/// # Examples
///
/// ```
/// use jsonatom::Value;
///
/// let v: Value = "\"hello\"".parse().unwrap();
/// assert_eq!(v.as_str(), Some("hello"));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonatom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// The boolean payload, if this is a [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a [`String`].
    ///
    /// The content is length-delimited, not NUL-terminated; it may contain
    /// embedded NUL characters decoded from `\u0000` escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonatom::parse;
    ///
    /// let v = parse("\"a\\u0000b\"").unwrap();
    /// assert_eq!(v.as_str(), Some("a\u{0}b"));
    /// assert_eq!(v.as_str().map(str::len), Some(3));
    /// ```
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Resets the value to [`Null`], releasing any owned payload.
    ///
    /// Idempotent: resetting an already-null value does nothing.
    ///
    /// [`Null`]: Value::Null
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Replaces the value with a boolean, releasing any owned payload.
    pub fn set_bool(&mut self, b: bool) {
        *self = Self::Boolean(b);
    }

    /// Replaces the value with a number, releasing any owned payload.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Replaces the value with an owned copy of `s`, releasing any prior
    /// payload first. Embedded NUL characters are preserved.
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Self::String(s.into());
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
