/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Mapping keys are string literals. Every element must be a single token
/// tree, so negative numbers need parentheses: `value!([(-1), 2])`.
///
/// ```
/// use mapcast_value::{Value, value};
///
/// let v = value!({ "id": 1, "scores": [(-1), 2.5], "note": null });
/// assert_eq!(v.get("note"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([]) => {
        $crate::Value::Sequence(::std::vec::Vec::new())
    };
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::Sequence(::std::vec![ $( $crate::value!($elem) ),+ ])
    };
    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };
    ({ $($key:literal : $val:tt),+ $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert(::std::string::String::from($key), $crate::value!($val));
        )+
        $crate::Value::Mapping(mapping)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Value, ValueKind};

    #[test]
    fn scalars() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!("hi"), Value::String("hi".into()));
        assert_eq!(value!(3), Value::Int(3));
        assert_eq!(value!((-3)), Value::Int(-3));
        assert_eq!(value!(3u64), Value::Uint(3));
        assert_eq!(value!(1.25), Value::Float(1.25));
    }

    #[test]
    fn containers() {
        let v = value!({
            "list": [1, "two", [3]],
            "nested": { "inner": null },
            "empty_list": [],
        });
        assert_eq!(v.kind(), ValueKind::Mapping);
        let list = v.get("list").and_then(Value::as_sequence).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], Value::Sequence(vec![Value::Int(3)]));
        assert_eq!(v.get("nested").and_then(|n| n.get("inner")), Some(&Value::Null));
        assert_eq!(v.get("empty_list"), Some(&Value::Sequence(vec![])));
    }

    #[test]
    fn expressions_are_converted() {
        let name = String::from("dyn");
        let v = value!({ "name": (name.clone()), "len": (name.len()) });
        assert_eq!(v.get("name"), Some(&Value::String("dyn".into())));
        assert_eq!(v.get("len"), Some(&Value::Uint(3)));
    }
}
