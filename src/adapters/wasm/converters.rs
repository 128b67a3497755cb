use js_sys::{Array, BigInt, Object, Reflect};
use serde_json::{Number, Value};
use wasm_bindgen::JsValue;

const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Builds the JS value for a JSON argument. Never fails: integers outside the
/// safe range become `BigInt`s and objects become plain objects.
pub fn to_js(value: &Value) -> JsValue {
    match value {
        Value::Null => JsValue::NULL,
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Number(n) => number_to_js(n),
        Value::String(s) => JsValue::from_str(s),
        Value::Array(items) => items.iter().map(to_js).collect::<Array>().into(),
        Value::Object(fields) => {
            let object = Object::new();
            for (key, field) in fields {
                let _ = Reflect::set(&object, &JsValue::from_str(key), &to_js(field));
            }
            object.into()
        }
    }
}

fn number_to_js(n: &Number) -> JsValue {
    if let Some(u) = n.as_u64() {
        if u > MAX_SAFE_INTEGER {
            return BigInt::from(u).into();
        }
    } else if let Some(i) = n.as_i64() {
        if i < -(MAX_SAFE_INTEGER as i64) {
            return BigInt::from(i).into();
        }
    }
    JsValue::from_f64(n.as_f64().unwrap_or(f64::NAN))
}

/// JSON view of a JS argument, for structured output and Rust-side hooks.
///
/// Lossy: `Error`s and `Date`s become `{}`, `undefined` and non-finite
/// numbers become `null`. The console path writes the original values.
pub fn from_js(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap_or(Value::Null)
}

pub fn messages_from_js(args: &Array) -> Vec<Value> {
    args.iter().map(from_js).collect()
}
