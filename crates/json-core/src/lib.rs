//! # json-core
//!
//! A self-contained JSON document model: a dynamically-typed value tree with
//! shared-handle copy semantics, a recursive-descent parser over a generic
//! byte cursor, and a deterministic serializer.
//!
//! Two ownership operations are deliberately distinct: `Clone` copies the
//! *handle* (arrays and objects stay shared, so mutations are visible
//! through every copy), while [`Json::deep_clone`] produces a fully
//! independent tree. Strings and object keys are raw byte sequences; UTF-8
//! is not required.
//!
//! ## Quick start
//!
//! ```rust
//! use json_core::Json;
//!
//! let mut doc = json_core::parse(br#"{"name":"ada", "scores":[95, 87]}"#);
//! assert!(doc.is_object());
//! assert_eq!(doc.at_key("name").as_string(), b"ada");
//!
//! // serialization is deterministic: sorted keys, ", " separators
//! assert_eq!(doc.to_text(), br#"{"name":"ada", "scores":[95, 87]}"#);
//!
//! // default copy shares the tree; deep_clone does not
//! let mut alias = doc.clone();
//! *alias.at_key("name") = Json::from("grace");
//! assert_eq!(doc.at_key("name").as_string(), b"grace");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Json`] tree: predicates, accessors, indexing, equality
//! - [`parser`] — `parse` (silent) / `try_parse` (`Result`) / `parse_from`
//! - [`serializer`] — canonical text rendering
//! - [`cursor`] — the [`Cursor`] input seam and [`SliceCursor`]
//! - [`error`] — [`ParseError`]
//! - [`interop`] — `serde_json::Value` conversions

pub mod cursor;
pub mod error;
pub mod interop;
mod lexer;
pub mod parser;
pub mod serializer;
pub mod value;

pub use cursor::{Cursor, SliceCursor};
pub use error::{ParseError, Result};
pub use parser::{parse, parse_from, try_parse};
pub use serializer::to_text;
pub use value::{Array, Json, Object};
