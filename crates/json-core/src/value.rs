//! The `Json` document tree.
//!
//! A [`Json`] value is a handle to a node in a dynamically-typed tree.
//! Scalars live inline in the handle; arrays and objects are
//! reference-counted, so copying a handle with `Clone` shares the container
//! with the original: a mutation made through one handle is visible through
//! every copy. [`Json::deep_clone`] is the only operation that produces a
//! tree with no shared nodes. Keeping those two operations under different
//! names is deliberate: call sites must say which one they mean.
//!
//! Strings and object keys are raw byte sequences. The parser does not
//! enforce UTF-8 (escape decoding can produce any byte), and the tree does
//! not either.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::serializer;

/// Ordered element storage for [`Json::Array`].
pub type Array = Vec<Json>;

/// Entry storage for [`Json::Object`]. Keys iterate in byte-lexicographic
/// order (also the serialized order), not insertion order.
pub type Object = BTreeMap<Vec<u8>, Json>;

/// A dynamically-typed JSON document node.
#[derive(Debug, Clone)]
pub enum Json {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(Rc<[u8]>),
    Array(Rc<RefCell<Array>>),
    Object(Rc<RefCell<Object>>),
}

impl Json {
    /// Parse a document, yielding `Null` on malformed input.
    pub fn parse(text: &[u8]) -> Json {
        crate::parser::parse(text)
    }

    /// Parse a document, reporting failures as [`crate::ParseError`].
    pub fn try_parse(text: &[u8]) -> Result<Json> {
        crate::parser::try_parse(text)
    }

    /// Empty array value.
    pub fn array() -> Json {
        Json::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// Empty object value.
    pub fn object() -> Json {
        Json::Object(Rc::new(RefCell::new(BTreeMap::new())))
    }

    fn tag(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Boolean(_) => "boolean",
            Json::Integer(_) => "integer",
            Json::Float(_) => "float",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Json::Boolean(_))
    }

    /// True for both integer and float values.
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Json::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Json::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Json::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Json::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Json::Object(_))
    }

    /// The boolean payload. Panics on any other tag.
    pub fn to_boolean(&self) -> bool {
        match self {
            Json::Boolean(b) => *b,
            other => panic!("called `to_boolean` on a value of type {}", other.tag()),
        }
    }

    /// The numeric payload as an integer; floats truncate toward zero.
    /// Panics on non-numeric tags.
    pub fn to_integer(&self) -> i64 {
        match self {
            Json::Integer(i) => *i,
            Json::Float(f) => *f as i64,
            other => panic!("called `to_integer` on a value of type {}", other.tag()),
        }
    }

    /// The numeric payload as a float; integers convert exactly up to 2^53.
    /// Panics on non-numeric tags.
    pub fn to_float(&self) -> f64 {
        match self {
            Json::Integer(i) => *i as f64,
            Json::Float(f) => *f,
            other => panic!("called `to_float` on a value of type {}", other.tag()),
        }
    }

    /// Serialize this value to its canonical text form. Valid for every
    /// tag; see [`crate::serializer::to_text`] for the exact format and its
    /// known limitations.
    pub fn to_text(&self) -> Vec<u8> {
        serializer::to_text(self)
    }

    /// Borrow the string bytes. Panics on any other tag.
    pub fn as_string(&self) -> &[u8] {
        match self {
            Json::String(s) => s,
            other => panic!("called `as_string` on a value of type {}", other.tag()),
        }
    }

    /// Borrow the array elements. Panics on any other tag.
    pub fn as_array(&self) -> Ref<'_, Array> {
        match self {
            Json::Array(a) => a.borrow(),
            other => panic!("called `as_array` on a value of type {}", other.tag()),
        }
    }

    /// Borrow the object entries. Panics on any other tag.
    pub fn as_object(&self) -> Ref<'_, Object> {
        match self {
            Json::Object(o) => o.borrow(),
            other => panic!("called `as_object` on a value of type {}", other.tag()),
        }
    }

    /// Element count of an array or entry count of an object.
    /// Panics on any other tag.
    pub fn size(&self) -> usize {
        match self {
            Json::Array(a) => a.borrow().len(),
            Json::Object(o) => o.borrow().len(),
            other => panic!("called `size` on a value of type {}", other.tag()),
        }
    }

    /// Mutable access to array slot `idx`. Indexing at or beyond the current
    /// length grows the array with `Null` padding, so the slot always
    /// exists. The growth is visible through every handle sharing this
    /// array.
    ///
    /// The returned guard borrows the array; drop it before touching the
    /// same array again.
    ///
    /// # Panics
    ///
    /// If the value is not an array.
    pub fn at(&mut self, idx: usize) -> RefMut<'_, Json> {
        match self {
            Json::Array(a) => {
                let mut elements = a.borrow_mut();
                if idx >= elements.len() {
                    elements.resize(idx + 1, Json::Null);
                }
                RefMut::map(elements, |e| &mut e[idx])
            }
            other => panic!("called `at` on a value of type {}", other.tag()),
        }
    }

    /// Mutable access to the object entry for `key`, inserting a `Null`
    /// entry when the key is absent. A `Null` value is first promoted to an
    /// empty object; the promotion rebinds this handle only, other handles
    /// to the former `Null` are unaffected.
    ///
    /// # Panics
    ///
    /// If the value is neither an object nor `Null`.
    pub fn at_key(&mut self, key: impl AsRef<[u8]>) -> RefMut<'_, Json> {
        if self.is_null() {
            *self = Json::object();
        }
        match self {
            Json::Object(o) => {
                let entries = o.borrow_mut();
                RefMut::map(entries, |e| {
                    e.entry(key.as_ref().to_vec()).or_insert(Json::Null)
                })
            }
            other => panic!("called `at_key` on a value of type {}", other.tag()),
        }
    }

    /// A fully independent copy: every array, object, and string buffer in
    /// the tree is reallocated, so no node is shared with `self`.
    pub fn deep_clone(&self) -> Json {
        match self {
            Json::String(s) => Json::String(Rc::from(&s[..])),
            Json::Array(a) => {
                let elements = a.borrow().iter().map(Json::deep_clone).collect();
                Json::Array(Rc::new(RefCell::new(elements)))
            }
            Json::Object(o) => {
                let entries = o
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect();
                Json::Object(Rc::new(RefCell::new(entries)))
            }
            scalar => scalar.clone(),
        }
    }
}

/// Structural, tag-sensitive equality. Arrays compare by length and
/// pairwise elements in order; objects by key set and per-key values.
/// Integer and float values are never equal to each other, even when
/// numerically identical, and float comparison follows `f64` (`NaN` is not
/// equal to itself, hence no `Eq` impl).
impl PartialEq for Json {
    fn eq(&self, other: &Json) -> bool {
        match (self, other) {
            (Json::Null, Json::Null) => true,
            (Json::Boolean(a), Json::Boolean(b)) => a == b,
            (Json::Integer(a), Json::Integer(b)) => a == b,
            (Json::Float(a), Json::Float(b)) => a == b,
            (Json::String(a), Json::String(b)) => a == b,
            (Json::Array(a), Json::Array(b)) => *a.borrow() == *b.borrow(),
            (Json::Object(a), Json::Object(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl Default for Json {
    /// `Null`, matching what the silent parser returns on malformed input.
    fn default() -> Json {
        Json::Null
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Json {
        Json::Boolean(b)
    }
}

impl From<i32> for Json {
    fn from(i: i32) -> Json {
        Json::Integer(i64::from(i))
    }
}

impl From<i64> for Json {
    fn from(i: i64) -> Json {
        Json::Integer(i)
    }
}

impl From<f64> for Json {
    fn from(f: f64) -> Json {
        Json::Float(f)
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Json {
        Json::String(Rc::from(s.as_bytes()))
    }
}

impl From<String> for Json {
    fn from(s: String) -> Json {
        Json::String(Rc::from(s.into_bytes()))
    }
}

impl From<&[u8]> for Json {
    fn from(bytes: &[u8]) -> Json {
        Json::String(Rc::from(bytes))
    }
}

impl From<Vec<u8>> for Json {
    fn from(bytes: Vec<u8>) -> Json {
        Json::String(Rc::from(bytes))
    }
}

impl From<Array> for Json {
    fn from(elements: Array) -> Json {
        Json::Array(Rc::new(RefCell::new(elements)))
    }
}

impl From<Object> for Json {
    fn from(entries: Object) -> Json {
        Json::Object(Rc::new(RefCell::new(entries)))
    }
}

impl fmt::Display for Json {
    /// Lossy rendering of [`Json::to_text`]: string payloads that are not
    /// valid UTF-8 appear with replacement characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_text()))
    }
}
