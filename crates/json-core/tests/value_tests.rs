use json_core::{Json, Object};

// ============================================================================
// Construction & Predicates
// ============================================================================

#[test]
fn default_is_null() {
    assert!(Json::default().is_null());
}

#[test]
fn from_bool() {
    let v = Json::from(true);
    assert!(v.is_boolean());
    assert!(v.to_boolean());
}

#[test]
fn from_integer() {
    let v = Json::from(42i64);
    assert!(v.is_integer());
    assert!(v.is_number());
    assert!(!v.is_float());
    assert_eq!(v.to_integer(), 42);
}

#[test]
fn from_i32_widens() {
    let v = Json::from(-7i32);
    assert!(v.is_integer());
    assert_eq!(v.to_integer(), -7);
}

#[test]
fn from_float() {
    let v = Json::from(3.5);
    assert!(v.is_float());
    assert!(v.is_number());
    assert!(!v.is_integer());
}

#[test]
fn from_str_and_bytes() {
    assert_eq!(Json::from("abc").as_string(), b"abc");
    assert_eq!(Json::from(String::from("abc")).as_string(), b"abc");
    assert_eq!(Json::from(vec![0xffu8, 0x00]).as_string(), [0xffu8, 0x00]);
    assert_eq!(Json::from(&b"xy"[..]).as_string(), b"xy");
}

#[test]
fn empty_container_constructors() {
    assert!(Json::array().is_array());
    assert_eq!(Json::array().size(), 0);
    assert!(Json::object().is_object());
    assert_eq!(Json::object().size(), 0);
}

#[test]
fn from_array_and_object() {
    let a = Json::from(vec![Json::from(1i64), Json::from(2i64)]);
    assert!(a.is_array());
    assert_eq!(a.size(), 2);

    let mut entries = Object::new();
    entries.insert(b"k".to_vec(), Json::Null);
    let o = Json::from(entries);
    assert!(o.is_object());
    assert_eq!(o.size(), 1);
}

// ============================================================================
// Narrowing Accessors
// ============================================================================

#[test]
fn numeric_conversions_cross_tags() {
    assert_eq!(Json::from(3i64).to_float(), 3.0);
    assert_eq!(Json::from(3.9).to_integer(), 3);
    assert_eq!(Json::from(-3.9).to_integer(), -3);
    assert_eq!(Json::from(2.5).to_float(), 2.5);
}

#[test]
fn as_array_borrows_elements() {
    let v = Json::from(vec![Json::from(1i64), Json::from("x")]);
    let elements = v.as_array();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0], Json::Integer(1));
}

#[test]
fn as_object_borrows_entries() {
    let mut v = Json::object();
    *v.at_key("a") = Json::from(1i64);
    let entries = v.as_object();
    assert_eq!(entries.get(&b"a"[..].to_vec()), Some(&Json::Integer(1)));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn scalar_equality() {
    assert_eq!(Json::Null, Json::Null);
    assert_eq!(Json::from(true), Json::from(true));
    assert_ne!(Json::from(true), Json::from(false));
    assert_eq!(Json::from(5i64), Json::from(5i64));
    assert_eq!(Json::from("a"), Json::from("a"));
    assert_ne!(Json::from("a"), Json::from("b"));
}

#[test]
fn integer_and_float_never_equal() {
    assert_ne!(Json::from(1i64), Json::from(1.0));
    assert_ne!(Json::from(0i64), Json::from(0.0));
}

#[test]
fn cross_tag_inequality() {
    assert_ne!(Json::Null, Json::from(false));
    assert_ne!(Json::from(0i64), Json::from("0"));
    assert_ne!(Json::array(), Json::object());
}

#[test]
fn nan_is_not_equal_to_itself() {
    assert_ne!(Json::from(f64::NAN), Json::from(f64::NAN));
}

#[test]
fn array_equality_is_ordered_and_recursive() {
    let a = Json::from(vec![Json::from(1i64), Json::from(2i64)]);
    let b = Json::from(vec![Json::from(1i64), Json::from(2i64)]);
    let c = Json::from(vec![Json::from(2i64), Json::from(1i64)]);
    let short = Json::from(vec![Json::from(1i64)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, short);
}

#[test]
fn object_equality_by_key_set_and_values() {
    let mut a = Json::object();
    *a.at_key("x") = Json::from(1i64);
    *a.at_key("y") = Json::from(2i64);

    let mut b = Json::object();
    *b.at_key("y") = Json::from(2i64);
    *b.at_key("x") = Json::from(1i64);
    assert_eq!(a, b);

    *b.at_key("y") = Json::from(3i64);
    assert_ne!(a, b);
}

#[test]
fn aliased_handles_compare_equal() {
    let v = Json::from(vec![Json::from(1i64)]);
    let alias = v.clone();
    assert_eq!(v, alias);
}

// ============================================================================
// Shared Copy vs Deep Clone
// ============================================================================

#[test]
fn default_copy_shares_object_storage() {
    let mut o = Json::object();
    *o.at_key("k") = Json::from(1i64);

    let mut o2 = o.clone();
    *o2.at_key("k") = Json::from(2i64);

    assert_eq!(*o.at_key("k"), Json::Integer(2));
}

#[test]
fn default_copy_shares_array_storage() {
    let mut a = Json::from(vec![Json::from(1i64)]);
    let mut a2 = a.clone();
    *a2.at(0) = Json::from(9i64);
    assert_eq!(*a.at(0), Json::Integer(9));
}

#[test]
fn default_copy_shares_nested_containers() {
    let mut o = Json::object();
    *o.at_key("list") = Json::from(vec![Json::from(1i64)]);

    let mut o2 = o.clone();
    *o2.at_key("list").at(0) = Json::from(5i64);

    assert_eq!(*o.at_key("list").at(0), Json::Integer(5));
}

#[test]
fn deep_clone_is_independent() {
    let mut o = Json::object();
    *o.at_key("k") = Json::from(1i64);

    let mut o3 = o.deep_clone();
    *o3.at_key("k") = Json::from(2i64);

    assert_eq!(*o.at_key("k"), Json::Integer(1));
    assert_eq!(*o3.at_key("k"), Json::Integer(2));
}

#[test]
fn deep_clone_equals_source() {
    let mut o = Json::object();
    *o.at_key("a") = Json::from(vec![Json::from(1i64), Json::from("s")]);
    *o.at_key("b") = Json::Null;
    assert_eq!(o.deep_clone(), o);
}

#[test]
fn deep_clone_detaches_nested_containers() {
    let mut o = Json::object();
    *o.at_key("list") = Json::from(vec![Json::from(1i64)]);

    let mut copy = o.deep_clone();
    *copy.at_key("list").at(0) = Json::from(9i64);

    assert_eq!(*o.at_key("list").at(0), Json::Integer(1));
}

// ============================================================================
// Auto-Vivification
// ============================================================================

#[test]
fn array_grows_when_indexed_beyond_length() {
    let mut a = Json::array();
    *a.at(3) = Json::from(7i64);

    assert_eq!(a.size(), 4);
    assert_eq!(*a.at(0), Json::Null);
    assert_eq!(*a.at(1), Json::Null);
    assert_eq!(*a.at(2), Json::Null);
    assert_eq!(*a.at(3), Json::Integer(7));
}

#[test]
fn array_grows_when_indexed_at_length() {
    let mut a = Json::from(vec![Json::from(1i64)]);
    assert_eq!(*a.at(1), Json::Null);
    assert_eq!(a.size(), 2);
}

#[test]
fn array_read_at_existing_index_does_not_grow() {
    let mut a = Json::from(vec![Json::from(1i64), Json::from(2i64)]);
    assert_eq!(*a.at(0), Json::Integer(1));
    assert_eq!(a.size(), 2);
}

#[test]
fn object_creates_null_entry_on_absent_key() {
    let mut o = Json::object();
    assert_eq!(*o.at_key("missing"), Json::Null);
    assert_eq!(o.size(), 1);
}

#[test]
fn null_promotes_to_object_on_key_access() {
    let mut v = Json::Null;
    assert_eq!(*v.at_key("k"), Json::Null);
    assert!(v.is_object());
    assert_eq!(v.size(), 1);
}

#[test]
fn null_promotion_is_handle_local() {
    let mut v = Json::Null;
    let v2 = v.clone();
    v.at_key("k");
    assert!(v.is_object());
    assert!(v2.is_null());
}

// ============================================================================
// Contract Violations
// ============================================================================

#[test]
#[should_panic(expected = "called `as_string` on a value of type integer")]
fn as_string_on_integer_panics() {
    Json::from(1i64).as_string();
}

#[test]
#[should_panic(expected = "called `as_array` on a value of type string")]
fn as_array_on_string_panics() {
    Json::from("x").as_array();
}

#[test]
#[should_panic(expected = "called `as_object` on a value of type array")]
fn as_object_on_array_panics() {
    Json::array().as_object();
}

#[test]
#[should_panic(expected = "called `to_boolean` on a value of type null")]
fn to_boolean_on_null_panics() {
    Json::Null.to_boolean();
}

#[test]
#[should_panic(expected = "called `to_integer` on a value of type string")]
fn to_integer_on_string_panics() {
    Json::from("5").to_integer();
}

#[test]
#[should_panic(expected = "called `to_float` on a value of type boolean")]
fn to_float_on_boolean_panics() {
    Json::from(true).to_float();
}

#[test]
#[should_panic(expected = "called `size` on a value of type float")]
fn size_on_scalar_panics() {
    Json::from(1.5).size();
}

#[test]
#[should_panic(expected = "called `at` on a value of type object")]
fn numeric_index_on_object_panics() {
    Json::object().at(0);
}

#[test]
#[should_panic(expected = "called `at_key` on a value of type integer")]
fn key_index_on_integer_panics() {
    Json::from(1i64).at_key("k");
}
