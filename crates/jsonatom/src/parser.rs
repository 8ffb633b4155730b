//! The decoding engine.
//!
//! One [`Session`] lives for the duration of a single [`parse`] call: a
//! borrowed view of the input, a byte cursor, and the scratch buffer that
//! assembles string content. Dispatch looks at the next byte and routes to
//! the literal matcher, the number lexer, or the string decoder; the driver
//! around it enforces that the input holds exactly one value.
//!
//! Scanning is byte-wise over the UTF-8 input. Every byte the grammar
//! treats specially (quotes, backslashes, digits, whitespace, control
//! characters) is ASCII, so verbatim string content between delimiters is
//! committed to the scratch as whole `&str` slices; multi-byte characters
//! pass through without being decoded.
//!
//! Invariants
//! - A failed decode consumes nothing: the cursor moves only when a
//!   complete literal, number span, or string has been accepted.
//! - The scratch buffer is logically empty on every exit from [`parse`];
//!   each string decode either detaches its bytes into a value or rolls
//!   back to the mark it took on entry.

use alloc::string::String;

use crate::{error::ParseError, scratch::ScratchBuffer, value::Value};

/// Decodes exactly one JSON scalar from `text`.
///
/// Leading and trailing JSON whitespace (space, tab, line feed, carriage
/// return) is permitted; any other surrounding content is an error. On
/// failure the code identifies the first problem found and no value is
/// produced.
///
/// # Errors
///
/// See [`ParseError`] for the failure taxonomy.
///
/// # Examples
///
/// ```
/// use jsonatom::{ParseError, Value, parse};
///
/// assert_eq!(parse("false"), Ok(Value::Boolean(false)));
/// assert_eq!(parse(" 1.5e2 "), Ok(Value::Number(150.0)));
/// assert_eq!(parse(r#""café""#), Ok(Value::String("café".into())));
/// assert_eq!(parse("1.5e2 true"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut session = Session::new(text);
    let result = session.parse_root();
    // Everything pushed while decoding was either detached into a value or
    // rolled back; a leftover byte here is a decoder bug.
    debug_assert_eq!(session.scratch.len(), 0);
    result
}

/// State for one top-level parse call.
pub(crate) struct Session<'src> {
    text: &'src str,
    cursor: usize,
    scratch: ScratchBuffer,
}

impl<'src> Session<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            text,
            cursor: 0,
            scratch: ScratchBuffer::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.cursor).copied()
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.cursor) {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.cursor += 1;
            } else {
                break;
            }
        }
    }

    /// The driver: exactly one value, whitespace allowed on both sides.
    pub(crate) fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        // Dispatching again could only report ExpectedValue with the cursor
        // at end of input, so any remaining byte means a second value (or
        // garbage) follows the first.
        if self.cursor < self.text.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    // --------------------------------------------------------------------
    // Dispatch
    // --------------------------------------------------------------------

    /// Routes on the next byte without consuming it.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'"') => self.parse_string(),
            Some(_) => self.parse_number(),
            None => Err(ParseError::ExpectedValue),
        }
    }

    /// Matches `literal` exactly. The cursor moves only on a full match; a
    /// partial prefix leaves it where dispatch found it.
    fn parse_literal(
        &mut self,
        literal: &'static str,
        value: Value,
    ) -> Result<Value, ParseError> {
        if self.text[self.cursor..].starts_with(literal) {
            self.cursor += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    // --------------------------------------------------------------------
    // Numbers
    // --------------------------------------------------------------------

    /// Validates `["-"] int ["." 1*digit] [("e"|"E") ["+"|"-"] 1*digit]`,
    /// with `int` either `0` or a nonzero digit followed by digits, then
    /// converts the accepted span in one shot.
    ///
    /// The scan is pure lookahead on a local index; the cursor commits only
    /// once the whole span is valid.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let bytes = self.text.as_bytes();
        let at = |i: usize| bytes.get(i).copied();
        let start = self.cursor;
        let mut i = start;

        if at(i) == Some(b'-') {
            i += 1;
        }
        match at(i) {
            Some(b'0') => {
                i += 1;
                // A leading zero takes no further digits: `0123` is a
                // malformed number, not `0` with trailing garbage.
                if at(i).is_some_and(|b| b.is_ascii_digit()) {
                    return Err(ParseError::InvalidValue);
                }
            }
            Some(b'1'..=b'9') => {
                while at(i).is_some_and(|b| b.is_ascii_digit()) {
                    i += 1;
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }

        if at(i) == Some(b'.') {
            i += 1;
            if !at(i).is_some_and(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidValue);
            }
            while at(i).is_some_and(|b| b.is_ascii_digit()) {
                i += 1;
            }
        }

        if matches!(at(i), Some(b'e' | b'E')) {
            i += 1;
            if matches!(at(i), Some(b'+' | b'-')) {
                i += 1;
            }
            if !at(i).is_some_and(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidValue);
            }
            while at(i).is_some_and(|b| b.is_ascii_digit()) {
                i += 1;
            }
        }

        // The validated span is a strict subset of what float parsing
        // accepts, so conversion cannot fail; the magnitude still can
        // overflow to infinity, which the grammar has no way to spell.
        let number: f64 = self.text[start..i]
            .parse()
            .map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.cursor = i;
        Ok(Value::Number(number))
    }

    // --------------------------------------------------------------------
    // Strings
    // --------------------------------------------------------------------

    /// Decodes a quoted string into an owned value.
    ///
    /// The scratch is marked on entry; whatever the scan pushed is rolled
    /// back if it fails, so an aborted decode leaves no partial content
    /// behind.
    fn parse_string(&mut self) -> Result<Value, ParseError> {
        let head = self.scratch.mark();
        match self.scan_string(head) {
            Ok(content) => Ok(Value::String(content)),
            Err(code) => {
                self.scratch.rollback_to(head);
                Err(code)
            }
        }
    }

    fn scan_string(&mut self, head: usize) -> Result<String, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        let bytes = self.text.as_bytes();
        let mut i = self.cursor + 1;
        // Start of the current run of verbatim bytes. Runs break only at
        // ASCII delimiters, so slicing at `run` and `i` always lands on
        // character boundaries.
        let mut run = i;
        loop {
            match bytes.get(i).copied() {
                None => return Err(ParseError::MissingQuotationMark),
                Some(b'"') => {
                    self.scratch.push_str(&self.text[run..i]);
                    self.cursor = i + 1;
                    return Ok(self.scratch.detach_from(head));
                }
                Some(b'\\') => {
                    self.scratch.push_str(&self.text[run..i]);
                    i += 1;
                    match bytes.get(i).copied() {
                        Some(b'"') => self.scratch.push_char('"'),
                        Some(b'\\') => self.scratch.push_char('\\'),
                        Some(b'/') => self.scratch.push_char('/'),
                        Some(b'b') => self.scratch.push_char('\u{8}'),
                        Some(b'f') => self.scratch.push_char('\u{c}'),
                        Some(b'n') => self.scratch.push_char('\n'),
                        Some(b'r') => self.scratch.push_char('\r'),
                        Some(b't') => self.scratch.push_char('\t'),
                        Some(b'u') => {
                            i += 1;
                            let ch = decode_unicode_escape(bytes, &mut i)?;
                            self.scratch.push_char(ch);
                            run = i;
                            continue;
                        }
                        _ => return Err(ParseError::InvalidStringEscape),
                    }
                    i += 1;
                    run = i;
                }
                Some(b) if b < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(_) => i += 1,
            }
        }
    }
}

/// Decodes the body of a `\u` escape starting at `*i` (the first expected
/// hex digit), leaving `*i` just past the last consumed byte.
///
/// A code unit in the high-surrogate range must be followed by a second
/// `\u` escape carrying the low half; the two combine to a single code
/// point above U+FFFF. An unpaired half has no scalar value and is
/// rejected.
fn decode_unicode_escape(bytes: &[u8], i: &mut usize) -> Result<char, ParseError> {
    let unit = read_hex4(bytes, i)?;
    let code_point = if (0xD800..=0xDBFF).contains(&unit) {
        if bytes.get(*i).copied() != Some(b'\\') {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        *i += 1;
        if bytes.get(*i).copied() != Some(b'u') {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        *i += 1;
        let low = read_hex4(bytes, i)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        (((unit - 0xD800) << 10) | (low - 0xDC00)) + 0x10000
    } else {
        unit
    };
    // Everything here is a scalar value except an unpaired low surrogate.
    char::from_u32(code_point).ok_or(ParseError::InvalidUnicodeSurrogate)
}

/// Reads exactly four hex digits as one 16-bit code unit.
fn read_hex4(bytes: &[u8], i: &mut usize) -> Result<u32, ParseError> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = bytes
            .get(*i)
            .copied()
            .and_then(|b| char::from(b).to_digit(16))
            .ok_or(ParseError::InvalidUnicodeHex)?;
        unit = (unit << 4) | digit;
        *i += 1;
    }
    Ok(unit)
}

#[cfg(test)]
impl Session<'_> {
    pub(crate) fn scratch_len(&self) -> usize {
        self.scratch.len()
    }
}
