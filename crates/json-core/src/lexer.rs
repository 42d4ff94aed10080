//! Token scanning and escape decoding.
//!
//! The lexer turns raw bytes from a [`Cursor`] into the three literal token
//! shapes the grammar needs: identifiers (only ever `true`/`false`/`null`),
//! numeric tokens, and quoted strings. All of the byte-level subtlety lives
//! in [`scan_string`]'s escape decoding.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};

/// A raw numeric token. `is_float` is set by the presence of `.`, `e`, or
/// `E` anywhere in the token; conversion to a value happens in the parser.
pub(crate) struct NumberToken {
    pub text: Vec<u8>,
    pub is_float: bool,
}

fn is_space(byte: u8) -> bool {
    // matches C isspace: space, \t, \n, \v, \f, \r
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

pub(crate) fn skip_whitespace<C: Cursor>(cur: &mut C) {
    while let Some(byte) = cur.peek() {
        if is_space(byte) {
            cur.take();
        } else {
            break;
        }
    }
}

/// Consume a run of letters, digits, and underscores.
pub(crate) fn scan_identifier<C: Cursor>(cur: &mut C) -> Vec<u8> {
    let mut token = Vec::new();
    while let Some(byte) = cur.take() {
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            token.push(byte);
        } else {
            cur.unget();
            break;
        }
    }
    token
}

/// Consume a numeric token. Besides digits, signs, and the float markers,
/// this accepts stray `x`/`X` bytes into the token; there is no hex-literal
/// support downstream, so conversion rejects such tokens as invalid numbers.
pub(crate) fn scan_number<C: Cursor>(cur: &mut C) -> NumberToken {
    let mut token = Vec::new();
    let mut is_float = false;
    while let Some(byte) = cur.take() {
        match byte {
            b'0'..=b'9' | b'x' | b'X' | b'+' | b'-' => token.push(byte),
            b'.' | b'e' | b'E' => {
                is_float = true;
                token.push(byte);
            }
            _ => {
                cur.unget();
                break;
            }
        }
    }
    NumberToken { text: token, is_float }
}

/// Decode a quoted string literal into raw bytes.
///
/// Opens on `'` or `"` (leading whitespace is skipped) and closes on the
/// matching quote. Escapes:
///
/// - `\\`, `\n`, `\r`, `\f`, `\v`, `\t`, `\b`
/// - `\0` + 1-3 octal digits: one byte
/// - `\x`/`\X` + 1-2 hex digits: one byte
/// - `\u`/`\U` + 1-4 hex digits: a 16-bit unit appended as raw bytes, high
///   byte first and only when nonzero. This is not UTF-8 encoding; the
///   exact byte output is part of the format.
/// - any other escaped byte stands for itself (`\"` → `"`, `\q` → `q`)
///
/// A raw line break inside the literal and end of input before the closing
/// quote are errors.
pub(crate) fn scan_string<C: Cursor>(cur: &mut C) -> Result<Vec<u8>> {
    skip_whitespace(cur);
    let quote = match cur.take() {
        Some(q @ (b'\'' | b'"')) => q,
        Some(_) => return Err(ParseError::ExpectedQuote),
        None => return Err(ParseError::UnexpectedEnd),
    };

    let mut token = Vec::new();
    loop {
        let byte = match cur.take() {
            Some(b) => b,
            None => return Err(ParseError::UnterminatedString),
        };
        if byte == quote {
            break;
        }
        if byte == b'\n' {
            return Err(ParseError::LineBreakInString);
        }
        if byte != b'\\' {
            token.push(byte);
            continue;
        }
        decode_escape(cur, &mut token)?;
    }
    Ok(token)
}

/// Decode one escape sequence; the backslash is already consumed.
fn decode_escape<C: Cursor>(cur: &mut C, out: &mut Vec<u8>) -> Result<()> {
    let escape = match cur.take() {
        Some(b) => b,
        None => return Err(ParseError::UnterminatedString),
    };
    match escape {
        b'\\' => out.push(b'\\'),
        b'n' => out.push(b'\n'),
        b'r' => out.push(b'\r'),
        b'f' => out.push(b'\x0c'),
        b'v' => out.push(b'\x0b'),
        b't' => out.push(b'\t'),
        b'b' => out.push(b'\x08'),
        b'u' | b'U' => {
            let unit = match read_hex(cur, 4) {
                Some(v) => v,
                None => return Err(ParseError::InvalidEscape(escape as char)),
            };
            let high = (unit >> 8) as u8;
            if high != 0 {
                out.push(high);
            }
            out.push(unit as u8);
        }
        b'x' | b'X' => {
            let byte = match read_hex(cur, 2) {
                Some(v) => v,
                None => return Err(ParseError::InvalidEscape(escape as char)),
            };
            out.push(byte as u8);
        }
        b'0' => {
            let byte = match read_octal(cur, 3) {
                Some(v) => v,
                None => return Err(ParseError::InvalidEscape('0')),
            };
            out.push(byte as u8);
        }
        b'\n' => return Err(ParseError::LineBreakInString),
        other => out.push(other),
    }
    Ok(())
}

/// Read up to `max` hex digits; `None` when the first byte is not one.
fn read_hex<C: Cursor>(cur: &mut C, max: u32) -> Option<u16> {
    let mut value: u16 = 0;
    let mut count = 0;
    while count < max {
        match cur.peek() {
            Some(byte) if byte.is_ascii_hexdigit() => {
                cur.take();
                value = (value << 4) | u16::from(hex_value(byte));
                count += 1;
            }
            _ => break,
        }
    }
    if count == 0 {
        None
    } else {
        Some(value)
    }
}

/// Read up to `max` octal digits; `None` when the first byte is not one.
/// Values wider than a byte truncate to the low eight bits.
fn read_octal<C: Cursor>(cur: &mut C, max: u32) -> Option<u16> {
    let mut value: u16 = 0;
    let mut count = 0;
    while count < max {
        match cur.peek() {
            Some(byte @ b'0'..=b'7') => {
                cur.take();
                value = (value << 3) | u16::from(byte - b'0');
                count += 1;
            }
            _ => break,
        }
    }
    if count == 0 {
        None
    } else {
        Some(value)
    }
}

fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}
