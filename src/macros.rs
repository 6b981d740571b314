/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// `None` maps to null, `[...]` to sequences, `{ "key": value }` to
/// mappings; any other expression goes through `Value::from`.
///
/// # Examples
///
/// ```rust
/// use simple_format::simple;
///
/// let doc = simple!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "extra": None
/// });
/// assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[macro_export]
macro_rules! simple {
    // Handle null
    (None) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::simple!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Mapping($crate::SimpleMap::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::SimpleMap::new();
        $(
            mapping.insert($key.to_string(), $crate::simple!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    // Fallback for any expression with a From impl
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{SimpleMap, Value};

    #[test]
    fn test_simple_macro_primitives() {
        assert_eq!(simple!(None), Value::Null);
        assert_eq!(simple!(true), Value::Bool(true));
        assert_eq!(simple!(false), Value::Bool(false));
        assert_eq!(simple!(42), Value::Number(42.0));
        assert_eq!(simple!(3.5), Value::Number(3.5));
        assert_eq!(simple!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_simple_macro_sequences() {
        assert_eq!(simple!([]), Value::Sequence(vec![]));

        let seq = simple!([1, 2, 3]);
        assert_eq!(
            seq,
            Value::Sequence(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
            ])
        );
    }

    #[test]
    fn test_simple_macro_mappings() {
        assert_eq!(simple!({}), Value::Mapping(SimpleMap::new()));

        let obj = simple!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Mapping(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(30.0)));
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_simple_macro_nesting() {
        let doc = simple!({
            "items": [1, [2, 3], {"k": "v"}],
            "empty": {}
        });
        let items = doc.get("items").and_then(|v| v.as_sequence()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], simple!([2, 3]));
    }
}
