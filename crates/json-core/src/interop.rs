//! Conversions between [`Json`] and `serde_json::Value`.
//!
//! For callers that already speak serde. The two models do not line up
//! exactly, and the conversions are lossy where they differ:
//!
//! - [`Json`] strings and keys are raw bytes; invalid UTF-8 becomes
//!   replacement characters going into `serde_json`.
//! - [`Json`] keeps integers and floats as distinct tags; a `serde_json`
//!   number maps to `Integer` when it fits `i64`, otherwise `Float`.
//! - Non-finite floats have no `serde_json` representation and become null.
//! - [`Json`] objects iterate in sorted key order, which is the order the
//!   `serde_json` map receives; insertion order on the serde side is lost
//!   in the other direction.

use serde_json::Value;

use crate::value::{Json, Object};

impl From<&Value> for Json {
    fn from(value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Boolean(*b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Json::Integer(i),
                (None, Some(f)) => Json::Float(f),
                (None, None) => Json::Null,
            },
            Value::String(s) => Json::from(s.as_str()),
            Value::Array(items) => {
                Json::from(items.iter().map(Json::from).collect::<Vec<Json>>())
            }
            Value::Object(entries) => {
                let mut object = Object::new();
                for (key, val) in entries {
                    object.insert(key.clone().into_bytes(), Json::from(val));
                }
                Json::from(object)
            }
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Json {
        Json::from(&value)
    }
}

impl From<&Json> for Value {
    fn from(value: &Json) -> Value {
        match value {
            Json::Null => Value::Null,
            Json::Boolean(b) => Value::Bool(*b),
            Json::Integer(i) => Value::Number((*i).into()),
            Json::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
            }
            Json::String(s) => Value::String(String::from_utf8_lossy(s).into_owned()),
            Json::Array(elements) => {
                Value::Array(elements.borrow().iter().map(Value::from).collect())
            }
            Json::Object(entries) => {
                let mut map = serde_json::Map::new();
                for (key, val) in entries.borrow().iter() {
                    map.insert(String::from_utf8_lossy(key).into_owned(), Value::from(val));
                }
                Value::Object(map)
            }
        }
    }
}
