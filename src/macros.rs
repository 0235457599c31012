/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// ```rust
/// use texts_between::{value, Value};
///
/// let data = value!({
///     "name": "squid",
///     "tags": ["sea", "ink"],
///     "owner": null
/// });
/// assert_eq!(data.lookup("tags[0]"), Some(&Value::from("sea")));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression convertible with `Value::from`
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([1, "two", null]),
            Value::Array(vec![Value::from(1), Value::from("two"), Value::Null])
        );
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(Map::new()));

        let obj = value!({
            "name": "Alice",
            "nested": { "age": 30 }
        });
        assert_eq!(obj.lookup("name"), Some(&Value::from("Alice")));
        assert_eq!(obj.lookup("nested.age"), Some(&Value::from(30)));
    }
}
