//! Error types for parsing JSON documents.

use thiserror::Error;

/// Errors reported while parsing a JSON document.
///
/// Parse errors are recoverable values: [`crate::try_parse`] returns them and
/// the silent [`crate::parse`] variant maps them to a `Null` result, never a
/// partial tree. Misuse of the value API itself (wrong-tag accessors,
/// indexing a scalar) is a programming error and panics instead of going
/// through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended where a value, separator, or closing bracket was required.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A byte that cannot start a value.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// An identifier other than `true`, `false`, or `null`.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// A numeric token that does not convert to an integer or float.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// An object key or string value did not open with `'` or `"`.
    #[error("expected a quote while processing string")]
    ExpectedQuote,

    /// A raw (unescaped) line break inside a string literal.
    #[error("line break in string literal")]
    LineBreakInString,

    /// Input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `\0`, `\x`, or `\u` escape without the digits it requires.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// An object member without a `:` between key and value.
    #[error("missing colon while processing object")]
    MissingColon,

    /// Array elements must be followed by `,` or `]`.
    #[error("expected ',' or ']' while processing array, found '{0}'")]
    ExpectedArraySeparator(char),

    /// Object members must be followed by `,` or `}`.
    #[error("expected ',' or '}}' while processing object, found '{0}'")]
    ExpectedObjectSeparator(char),
}

/// Convenience alias used throughout json-core.
pub type Result<T> = std::result::Result<T, ParseError>;
