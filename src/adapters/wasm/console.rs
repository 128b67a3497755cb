use crate::adapters::wasm::converters::to_js;
use crate::domain::ConsoleMethod;
use crate::ports::ConsolePort;
use js_sys::Array;
use serde_json::Value;
use web_sys::console;

/// Browser console, one variadic call per write.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for Console {
    fn write(&self, method: ConsoleMethod, args: &[Value]) {
        let data: Array = args.iter().map(to_js).collect();
        self.write_raw(method, &data);
    }

    fn write_raw(&self, method: ConsoleMethod, args: &Array) {
        match method {
            ConsoleMethod::Trace => console::trace(args),
            ConsoleMethod::Debug => console::debug(args),
            ConsoleMethod::Info => console::info(args),
            ConsoleMethod::Warn => console::warn(args),
            ConsoleMethod::Error => console::error(args),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_console_all_methods() {
        let console = Console::new();
        console.write(ConsoleMethod::Trace, &[json!("trace")]);
        console.write(ConsoleMethod::Debug, &[json!("debug"), json!(1)]);
        console.write(ConsoleMethod::Info, &[json!("user %s logged in"), json!("alice")]);
        console.write(ConsoleMethod::Warn, &[json!({"nested": [1, 2]}), json!(u64::MAX)]);
        console.write(ConsoleMethod::Error, &[]);
    }

    #[wasm_bindgen_test]
    fn test_console_raw_values() {
        let args: Array = [
            JsValue::from(js_sys::Error::new("boom")),
            JsValue::UNDEFINED,
            JsValue::from_f64(f64::NAN),
        ]
        .iter()
        .collect();
        Console::new().write_raw(ConsoleMethod::Error, &args);
    }
}
