use crate::ObjectValue;
use crate::Value;

#[test]
fn scalar_conversions() {
    assert!(matches!(Value::from(true), Value::Bool(true)));
    assert!(matches!(Value::from(7_i64), Value::Int(7)));
    assert!(matches!(Value::from(1.5), Value::Float(f) if f == 1.5));
    assert!(matches!(Value::from("hi"), Value::String(ref s) if s == "hi"));
    assert!(matches!(Value::from("hi".to_string()), Value::String(ref s) if s == "hi"));
}

#[test]
fn options_map_none_to_null() {
    assert!(Value::from(None::<i64>).is_null());
    assert!(matches!(Value::from(Some(3_i64)), Value::Int(3)));
    assert!(!Value::from(false).is_null());
}

#[test]
fn lists() {
    let Value::List(items) = Value::from(vec![Value::Null, Value::from(1_i64)]) else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 2);
    assert!(items[0].is_null());

    let Value::List(items) = Value::list((0_i64..3).map(Value::from)) else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn objects_keep_field_order() {
    let Value::Object(object) = Value::object([
        ("z", Value::from(1_i64)),
        ("a", Value::from(2_i64)),
    ]) else {
        panic!("expected an object");
    };

    assert_eq!(object.fields().keys().collect::<Vec<_>>(), vec!["z", "a"]);
    assert!(matches!(object.get("a"), Some(Value::Int(2))));
    assert!(object.get("missing").is_none());
    assert_eq!(object.type_name(), None);
}

#[test]
fn typed_objects() {
    let Value::Object(object) = Value::typed_object("Image", [("url", Value::from("a.png"))])
    else {
        panic!("expected an object");
    };
    assert_eq!(object.type_name(), Some("Image"));

    let value = Value::from(ObjectValue::new(Some("Video".to_string()), [("id", Value::Null)]));
    let Value::Object(object) = value else {
        panic!("expected an object");
    };
    assert_eq!(object.type_name(), Some("Video"));
    assert!(object.get("id").unwrap().is_null());
}

#[test]
fn clones_share_containers() {
    let original = Value::list([Value::from(1_i64)]);
    let copy = original.clone();
    let (Value::List(a), Value::List(b)) = (&original, &copy) else {
        panic!("expected lists");
    };
    assert!(std::sync::Arc::ptr_eq(a, b));
}
