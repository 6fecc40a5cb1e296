#![allow(dead_code)]

use kisexpr::Value;

#[allow(unused_macros)]
/// Build an expected tree: `sx!(["a", ["b", "c"], []])`.
macro_rules! sx {
    ([$($e:tt),* $(,)?]) => {
        kisexpr::Value::List(vec![$(sx!($e)),*])
    };
    ($e:expr) => {
        kisexpr::Value::from($e)
    };
}

pub fn nested_lists(depth: usize) -> String {
    format!("{}{}", "(".repeat(depth), ")".repeat(depth))
}

pub fn innermost(v: &Value) -> &Value {
    match v.as_list() {
        Some([inner]) => innermost(inner),
        _ => v,
    }
}
