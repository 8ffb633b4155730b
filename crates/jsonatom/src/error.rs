use thiserror::Error;

/// Why an input failed to decode.
///
/// Failures detected inside the number and string decoders propagate to the
/// caller unchanged; [`RootNotSingular`] is the only code synthesized by the
/// top-level driver itself. On any error no value is produced.
///
/// [`RootNotSingular`]: ParseError::RootNotSingular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectedValue,
    /// The input does not start a valid literal, number, or string.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was followed by further non-whitespace input.
    #[error("more than one top-level value")]
    RootNotSingular,
    /// A number's magnitude does not fit a 64-bit float.
    #[error("number out of range")]
    NumberTooBig,
    /// A string ran to end of input without a closing `"`.
    #[error("missing closing quotation mark")]
    MissingQuotationMark,
    /// A `\` escape used an unknown selector character.
    #[error("invalid escape sequence")]
    InvalidStringEscape,
    /// An unescaped control character (below U+0020) appeared in a string.
    #[error("invalid raw character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("invalid hex digits in unicode escape")]
    InvalidUnicodeHex,
    /// A surrogate escape was unpaired or out of range.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
}
