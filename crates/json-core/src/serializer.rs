//! Canonical text rendering of a [`Json`] tree.

use crate::value::Json;

/// Render `value` to its canonical text form.
///
/// One form per tag: `null`, `true`/`false`, integers in decimal, floats
/// through Rust's default formatting, strings wrapped in quotes, arrays as
/// `[e0, e1]` and objects as `{"k0":v0, "k1":v1}`: `", "` between entries,
/// no space after `:`, keys in sorted order.
///
/// Known limitations, kept deliberately:
///
/// - String contents are emitted raw, with no escaping. A string containing
///   a quote or control bytes will not survive a parse of the output.
/// - A float with no fractional part prints without a decimal point and
///   re-reads as an integer, so a serialize-then-parse pass is not an identity for
///   floats (it is for integers).
pub fn to_text(value: &Json) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Json, out: &mut Vec<u8>) {
    match value {
        Json::Null => out.extend_from_slice(b"null"),
        Json::Boolean(true) => out.extend_from_slice(b"true"),
        Json::Boolean(false) => out.extend_from_slice(b"false"),
        Json::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        Json::Float(f) => out.extend_from_slice(f.to_string().as_bytes()),
        Json::String(s) => {
            out.push(b'"');
            out.extend_from_slice(s);
            out.push(b'"');
        }
        Json::Array(elements) => {
            out.push(b'[');
            for (i, element) in elements.borrow().iter().enumerate() {
                if i > 0 {
                    out.extend_from_slice(b", ");
                }
                write_value(element, out);
            }
            out.push(b']');
        }
        Json::Object(entries) => {
            out.push(b'{');
            for (i, (key, element)) in entries.borrow().iter().enumerate() {
                if i > 0 {
                    out.extend_from_slice(b", ");
                }
                out.push(b'"');
                out.extend_from_slice(key);
                out.extend_from_slice(b"\":");
                write_value(element, out);
            }
            out.push(b'}');
        }
    }
}
