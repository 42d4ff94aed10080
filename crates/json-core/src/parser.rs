//! Recursive-descent parser: bytes in, [`Json`] tree out.
//!
//! Grammar: `value := identifier | number | string | array | object`, with
//! whitespace skipped before every value and dispatch decided by the first
//! non-whitespace byte. A parse either completes or reports an error; no
//! partial tree is ever returned. Input after the first complete value is
//! not inspected.

use crate::cursor::{Cursor, SliceCursor};
use crate::error::{ParseError, Result};
use crate::lexer::{self, NumberToken};
use crate::value::{Json, Object};

/// Parse a document, mapping any parse error to a `Null` value.
///
/// This is the silent variant; use [`try_parse`] when the error matters.
pub fn parse(text: &[u8]) -> Json {
    try_parse(text).unwrap_or(Json::Null)
}

/// Parse a document, reporting failures as [`ParseError`].
pub fn try_parse(text: &[u8]) -> Result<Json> {
    parse_from(&mut SliceCursor::new(text))
}

/// Parse a document from any [`Cursor`] implementation.
pub fn parse_from<C: Cursor>(cur: &mut C) -> Result<Json> {
    parse_value(cur)
}

fn parse_value<C: Cursor>(cur: &mut C) -> Result<Json> {
    lexer::skip_whitespace(cur);
    let byte = match cur.peek() {
        Some(b) => b,
        None => return Err(ParseError::UnexpectedEnd),
    };
    match byte {
        b'_' | b'a'..=b'z' | b'A'..=b'Z' => parse_identifier(cur),
        b'+' | b'-' | b'0'..=b'9' => parse_number(cur),
        b'\'' | b'"' => Ok(Json::from(lexer::scan_string(cur)?)),
        b'[' => parse_array(cur),
        b'{' => parse_object(cur),
        other => Err(ParseError::UnexpectedCharacter(other as char)),
    }
}

fn parse_identifier<C: Cursor>(cur: &mut C) -> Result<Json> {
    let token = lexer::scan_identifier(cur);
    match token.as_slice() {
        b"true" => Ok(Json::Boolean(true)),
        b"false" => Ok(Json::Boolean(false)),
        b"null" => Ok(Json::Null),
        _ => Err(ParseError::UnexpectedToken(
            String::from_utf8_lossy(&token).into_owned(),
        )),
    }
}

/// Convert a numeric token. Integer tokens must be an optional sign
/// followed by digits; anything else the lexer tolerated (stray `x`/`X`,
/// embedded signs, overflow) is an invalid number.
fn parse_number<C: Cursor>(cur: &mut C) -> Result<Json> {
    let NumberToken { text, is_float } = lexer::scan_number(cur);
    let literal = String::from_utf8_lossy(&text).into_owned();
    let number = if is_float {
        literal.parse::<f64>().ok().map(Json::Float)
    } else {
        literal.parse::<i64>().ok().map(Json::Integer)
    };
    number.ok_or(ParseError::InvalidNumber(literal))
}

fn parse_array<C: Cursor>(cur: &mut C) -> Result<Json> {
    cur.take(); // the '['
    lexer::skip_whitespace(cur);
    if cur.peek() == Some(b']') {
        cur.take();
        return Ok(Json::array());
    }

    let mut elements = Vec::new();
    loop {
        elements.push(parse_value(cur)?);

        lexer::skip_whitespace(cur);
        match cur.take() {
            Some(b']') => break,
            Some(b',') => continue,
            Some(other) => return Err(ParseError::ExpectedArraySeparator(other as char)),
            None => return Err(ParseError::UnexpectedEnd),
        }
    }
    Ok(Json::from(elements))
}

fn parse_object<C: Cursor>(cur: &mut C) -> Result<Json> {
    cur.take(); // the '{'
    lexer::skip_whitespace(cur);
    if cur.peek() == Some(b'}') {
        cur.take();
        return Ok(Json::object());
    }

    let mut entries = Object::new();
    loop {
        let key = lexer::scan_string(cur)?;

        lexer::skip_whitespace(cur);
        match cur.take() {
            Some(b':') => {}
            _ => return Err(ParseError::MissingColon),
        }

        let value = parse_value(cur)?;
        // first occurrence of a duplicate key wins
        entries.entry(key).or_insert(value);

        lexer::skip_whitespace(cur);
        match cur.take() {
            Some(b'}') => break,
            Some(b',') => continue,
            Some(other) => return Err(ParseError::ExpectedObjectSeparator(other as char)),
            None => return Err(ParseError::UnexpectedEnd),
        }
    }
    Ok(Json::from(entries))
}
