/// Builds a [`Value`](crate::Value) tree with notation-flavoured syntax.
///
/// Dict entries use `=` between key and value, just like the text format.
///
/// ```rust
/// use iot_record::{parse, record};
///
/// let expected = record!({
///     "cepid" = "CEP010",
///     "filecount" = 58,
///     "tags" = ["iot", 1.5, null]
/// });
/// assert_eq!(parse("{cepid=CEP010, filecount=58, tags=[iot, 1.5, null]}").unwrap(), expected);
/// ```
#[macro_export]
macro_rules! record {
    // Handle null
    (null) => {
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

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::record!($elem)),*])
    };

    // Handle empty dict
    ({}) => {
        $crate::Value::Dict($crate::Map::new())
    };

    // Handle non-empty dict
    ({ $($key:literal = $value:tt),* $(,)? }) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($key.to_string(), $crate::record!($value));
        )*
        $crate::Value::Dict(map)
    }};

    // Fallback: anything Value::from can absorb
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
