use texts_between::{value, Map, Number, TextsBetween, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(
        value!("hello world"),
        Value::String("hello world".to_string())
    );
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed_array = value!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let simple_object = value!({
        "name": "Alice",
        "age": 30
    });

    match simple_object {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 2);
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("age"), Some(&Value::Number(Number::Integer(30))));
            let keys: Vec<_> = obj.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["name", "age"]);
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    assert_eq!(nested.lookup("user.id"), Some(&Value::from(123)));
    assert_eq!(nested.lookup("user.name").and_then(Value::as_str), Some("Bob"));
    assert_eq!(nested.lookup("user.active").and_then(Value::as_bool), Some(true));
    assert_eq!(nested.lookup("tags[1]").and_then(Value::as_str), Some("developer"));
    assert_eq!(nested.lookup("tags[2]"), None);
    assert_eq!(nested.lookup("count").and_then(Value::as_i64), Some(42));
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());
    assert_eq!(null_val.kind(), "null");

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));

    let obj_val = value!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.kind(), "object");
}

#[test]
fn test_replacement_text() {
    assert_eq!(value!("plain").as_replacement(), "plain");
    assert_eq!(value!(null).as_replacement(), "");
    assert_eq!(value!(7).as_replacement(), "7");
    assert_eq!(value!(false).as_replacement(), "false");
    assert_eq!(value!(["a", 1]).as_replacement(), r#"["a",1]"#);
    assert_eq!(value!({ "k": "v" }).as_replacement(), r#"{"k":"v"}"#);
}

#[test]
fn test_macro_payload_in_template() {
    let data = value!({
        "order": { "id": 1001, "items": [{ "sku": "W-1" }, { "sku": "G-9" }] },
        "note": null
    });
    let pattern = TextsBetween::new("${", "}").unwrap();
    let out = pattern
        .replace(
            "#${order.id}: ${order.items[0].sku}, ${order.items[1].sku}${note}${missing}",
            &data,
        )
        .unwrap();
    assert_eq!(out, "#1001: W-1, G-9");
}
